//! Collection sections. Each submodule owns one independently-failing
//! section of the inventory pass; `computer_info` sequences them.

pub mod computer_info;
pub mod directory;
pub mod hardware;
pub mod lookups;
pub mod memory;
pub mod network;
pub mod os;
pub mod storage;
