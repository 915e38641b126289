// Adapters layer: concrete surfaces over the core (currently HTTP only).

pub mod http;
