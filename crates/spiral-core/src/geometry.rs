//! Companion wireframe: a subdivided icosahedron projected onto a sphere.

use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;

const PHI: f32 = 1.618_034; // (1 + sqrt 5) / 2

const ICOSAHEDRON_VERTICES: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

// positions closer than WELD_EPSILON are one vertex; the hash grid is coarser
const WELD_EPSILON: f32 = 1e-4;
const WELD_CELL: f32 = 1e-3;

/// Indexed line list: `indices` holds one pair per edge.
#[derive(Clone, Debug, Default)]
pub struct Wireframe {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Wireframe {
    pub fn edge_count(&self) -> usize {
        self.indices.len() / 2
    }
}

/// Build the edges of an icosahedron whose faces are split `detail + 1` times
/// per side, with every vertex pushed out to `radius`.
pub fn icosahedron_wireframe(radius: f32, detail: u32) -> Wireframe {
    let cols = detail as usize + 1;
    let mut welder = Welder::default();
    for face in ICOSAHEDRON_FACES {
        let [a, b, c] = face.map(|i| Vec3::from(ICOSAHEDRON_VERTICES[i]));
        let grid = subdivide_face(a, b, c, cols);
        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                let tri = if j % 2 == 0 {
                    [grid[i][k + 1], grid[i + 1][k], grid[i][k]]
                } else {
                    [grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]
                };
                let ids = tri.map(|p| welder.vertex(p.normalize() * radius));
                welder.edge(ids[0], ids[1]);
                welder.edge(ids[1], ids[2]);
                welder.edge(ids[2], ids[0]);
            }
        }
    }
    Wireframe {
        positions: welder.positions,
        indices: welder.indices,
    }
}

// Row i runs from lerp(a, c, i/cols) to lerp(b, c, i/cols) with cols - i steps.
fn subdivide_face(a: Vec3, b: Vec3, c: Vec3, cols: usize) -> Vec<Vec<Vec3>> {
    (0..=cols)
        .map(|i| {
            let t = i as f32 / cols as f32;
            let aj = a.lerp(c, t);
            let bj = b.lerp(c, t);
            let rows = cols - i;
            (0..=rows)
                .map(|j| {
                    if rows == 0 {
                        aj
                    } else {
                        aj.lerp(bj, j as f32 / rows as f32)
                    }
                })
                .collect()
        })
        .collect()
}

#[derive(Default)]
struct Welder {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    cells: FnvHashMap<[i32; 3], Vec<u32>>,
    edges: FnvHashSet<(u32, u32)>,
}

impl Welder {
    fn vertex(&mut self, p: Vec3) -> u32 {
        let cell = (p / WELD_CELL).floor().to_array().map(|c| c as i32);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let key = [cell[0] + dx, cell[1] + dy, cell[2] + dz];
                    let Some(ids) = self.cells.get(&key) else {
                        continue;
                    };
                    for &id in ids {
                        if self.positions[id as usize].distance_squared(p)
                            < WELD_EPSILON * WELD_EPSILON
                        {
                            return id;
                        }
                    }
                }
            }
        }
        let id = self.positions.len() as u32;
        self.positions.push(p);
        self.cells.entry(cell).or_default().push(id);
        id
    }

    fn edge(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }
        let key = (a.min(b), a.max(b));
        if self.edges.insert(key) {
            self.indices.extend_from_slice(&[key.0, key.1]);
        }
    }
}
