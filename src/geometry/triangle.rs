use super::PositionVertex;

/// Triangle spanning clip space: bottom-left, bottom-right, top-center.
pub const VERTICES: [PositionVertex; 3] = [
    PositionVertex {
        position: [-1.0, -1.0, 0.0],
    },
    PositionVertex {
        position: [1.0, -1.0, 0.0],
    },
    PositionVertex {
        position: [0.0, 1.0, 0.0],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_lies_in_xy_plane() {
        assert!(VERTICES.iter().all(|v| v.position[2] == 0.0));
    }
}
