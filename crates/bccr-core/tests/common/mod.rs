pub mod rando_server;
