//! Read-only lookup structures over a source graph
//!
//! `GraphIndex` is built once per extraction call and never mutates the
//! source document.

pub mod index;
pub mod maps;

pub use index::GraphIndex;
pub use maps::{
    build_consumer_map, build_declared_outputs, build_initializer_map, build_producer_map,
    build_value_info_map, ConsumerMap, InitializerMap, ProducerMap, ValueInfoMap,
};
