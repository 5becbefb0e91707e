//! Whole-pipeline tests: sprite in, world-space segments out
