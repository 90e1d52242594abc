// Provider response mappers

pub mod route;
