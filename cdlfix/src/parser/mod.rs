//! Input parsers: positional `key=value` attribute extraction from netlist
//! lines, and the indentation-structured module/port descriptor format.

pub mod attr;
pub mod socmod;
