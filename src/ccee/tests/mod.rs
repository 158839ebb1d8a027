mod common;
mod confidence;
