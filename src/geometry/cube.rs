use super::ColoredVertex;

const fn vertex(position: [f32; 3], color: [f32; 3]) -> ColoredVertex {
    ColoredVertex { position, color }
}

/// Number of vertices: 12 triangles, two per face.
pub const VERTEX_COUNT: u32 = 36;

/// Unit cube spanning `[-1, 1]^3` as a triangle list. Colors are arbitrary
/// per vertex so the faces read as distinct patches.
#[rustfmt::skip]
pub const VERTICES: [ColoredVertex; VERTEX_COUNT as usize] = [
    vertex([-1.0, -1.0, -1.0], [0.583, 0.771, 0.014]),
    vertex([-1.0, -1.0, 1.0], [0.609, 0.115, 0.436]),
    vertex([-1.0, 1.0, 1.0], [0.327, 0.483, 0.844]),
    vertex([1.0, 1.0, -1.0], [0.822, 0.569, 0.201]),
    vertex([-1.0, -1.0, -1.0], [0.435, 0.602, 0.223]),
    vertex([-1.0, 1.0, -1.0], [0.31, 0.747, 0.185]),
    vertex([1.0, -1.0, 1.0], [0.597, 0.77, 0.761]),
    vertex([-1.0, -1.0, -1.0], [0.559, 0.436, 0.73]),
    vertex([1.0, -1.0, -1.0], [0.359, 0.583, 0.152]),
    vertex([1.0, 1.0, -1.0], [0.483, 0.596, 0.789]),
    vertex([1.0, -1.0, -1.0], [0.559, 0.861, 0.639]),
    vertex([-1.0, -1.0, -1.0], [0.195, 0.548, 0.859]),
    vertex([-1.0, -1.0, -1.0], [0.014, 0.184, 0.576]),
    vertex([-1.0, 1.0, 1.0], [0.771, 0.328, 0.97]),
    vertex([-1.0, 1.0, -1.0], [0.406, 0.615, 0.116]),
    vertex([1.0, -1.0, 1.0], [0.676, 0.977, 0.133]),
    vertex([-1.0, -1.0, 1.0], [0.971, 0.572, 0.833]),
    vertex([-1.0, -1.0, -1.0], [0.14, 0.616, 0.489]),
    vertex([-1.0, 1.0, 1.0], [0.997, 0.513, 0.064]),
    vertex([-1.0, -1.0, 1.0], [0.945, 0.719, 0.592]),
    vertex([1.0, -1.0, 1.0], [0.543, 0.021, 0.978]),
    vertex([1.0, 1.0, 1.0], [0.279, 0.317, 0.505]),
    vertex([1.0, -1.0, -1.0], [0.167, 0.62, 0.077]),
    vertex([1.0, 1.0, -1.0], [0.347, 0.857, 0.137]),
    vertex([1.0, -1.0, -1.0], [0.055, 0.953, 0.042]),
    vertex([1.0, 1.0, 1.0], [0.714, 0.505, 0.345]),
    vertex([1.0, -1.0, 1.0], [0.783, 0.29, 0.734]),
    vertex([1.0, 1.0, 1.0], [0.722, 0.645, 0.174]),
    vertex([1.0, 1.0, -1.0], [0.302, 0.455, 0.848]),
    vertex([-1.0, 1.0, -1.0], [0.225, 0.587, 0.04]),
    vertex([1.0, 1.0, 1.0], [0.517, 0.713, 0.338]),
    vertex([-1.0, 1.0, -1.0], [0.053, 0.959, 0.12]),
    vertex([-1.0, 1.0, 1.0], [0.393, 0.621, 0.362]),
    vertex([1.0, 1.0, 1.0], [0.673, 0.211, 0.457]),
    vertex([-1.0, 1.0, 1.0], [0.82, 0.883, 0.371]),
    vertex([1.0, -1.0, 1.0], [0.982, 0.099, 0.879]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_corner_is_a_unit_cube_corner() {
        for v in &VERTICES {
            assert!(v.position.iter().all(|c| c.abs() == 1.0));
        }
    }

    #[test]
    fn each_face_has_two_triangles() {
        // Six faces, each shared by exactly two triangles whose three
        // vertices agree on one fixed axis.
        let mut faces = std::collections::HashMap::new();
        for tri in VERTICES.chunks_exact(3) {
            let face = (0..3).find_map(|axis| {
                let value = tri[0].position[axis];
                tri.iter()
                    .all(|v| v.position[axis] == value)
                    .then_some((axis, value > 0.0))
            });
            *faces.entry(face).or_insert(0) += 1;
        }
        assert_eq!(faces.len(), 6);
        assert!(faces.keys().all(Option::is_some));
        assert!(faces.values().all(|n| *n == 2));
    }

    #[test]
    fn colors_are_in_unit_range() {
        for v in &VERTICES {
            assert!(v.color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }
}
