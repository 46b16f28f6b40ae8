//! Supported cereal kinds for storage.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cereal {
    Amaranth,
    Buckwheat,
    Bulgur,
    Millet,
    Peas,
    Rice,
}

impl Cereal {
    /// Returns all the possible values of Cereal
    pub fn values() -> Vec<Cereal> {
        vec![
            Cereal::Amaranth,
            Cereal::Buckwheat,
            Cereal::Bulgur,
            Cereal::Millet,
            Cereal::Peas,
            Cereal::Rice,
        ]
    }

    /// Human-readable label used in storage summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Cereal::Amaranth => "amaranth",
            Cereal::Buckwheat => "buckwheat",
            Cereal::Bulgur => "bulgur",
            Cereal::Millet => "millet",
            Cereal::Peas => "peas",
            Cereal::Rice => "rice",
        }
    }
}

impl fmt::Display for Cereal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
