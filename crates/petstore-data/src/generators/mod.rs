//! 负载生成器模块

pub mod data_generator;
pub mod pools;

pub use data_generator::{DataGenerator, OrderBuilder, PetBuilder, UserBuilder};
