#![allow(dead_code)]

pub mod mock_ausis_server;
