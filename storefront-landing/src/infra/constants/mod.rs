pub mod carousel;
pub mod layout;
pub mod subscribe;
