// Domain layer: the value-holder entities the refactoring studies operate on.
// No external dependencies beyond std.

pub mod model;
