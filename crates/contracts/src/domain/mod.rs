pub mod a001_broker;
pub mod a002_broker_key;
pub mod a003_trade;
