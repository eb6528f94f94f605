//! `bccr print-conf` – print the stock configuration template.

use bccr_core::conf;

pub fn run_print_conf() {
    print!("{}", conf::DEFAULT_CONF);
}
