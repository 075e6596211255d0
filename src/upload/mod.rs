pub mod controller;
pub mod disk;
pub mod model;
pub mod service;
