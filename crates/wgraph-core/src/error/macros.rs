//! Error macros for wgraph

/// Macro for rejecting a vertex index outside `0..$count`
#[macro_export]
macro_rules! ensure_vertex {
    ($vertex:expr, $count:expr) => {
        if $vertex >= $count {
            return Err($crate::error::GraphError::vertex_out_of_range(
                $vertex, $count,
            ));
        }
    };
}
