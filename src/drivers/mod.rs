pub mod lsm6ds3;
