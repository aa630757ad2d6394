//! CrudService: record operations on top of a store, with error classification.

mod crud;
pub use crud::CrudService;
