mod checksum;
mod print_conf;
mod randomize;

pub use checksum::run_checksum;
pub use print_conf::run_print_conf;
pub use randomize::run_randomize;
