//! Line-store rewriting passes, applied in the fixed pipeline order:
//! section presence, case normalization, geometric recovery, pininfo merge.

pub mod case;
pub mod geometry;
pub mod pininfo;
pub mod sections;
