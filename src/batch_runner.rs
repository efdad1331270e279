pub mod cancel;
pub mod main;
pub mod reporter;
pub mod scan;
