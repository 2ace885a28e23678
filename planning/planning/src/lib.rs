pub mod assignment;
pub mod batch;
pub mod purchase;
pub mod session;
pub mod work_table;
