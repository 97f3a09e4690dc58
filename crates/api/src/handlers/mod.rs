pub mod parks;
