use glam::Vec3;
use std::f32::consts::PI;

/// Vertex grid of a UV sphere, row by row from the north pole.
///
/// Produces `(width_segments + 1) * (height_segments + 1)` points; the seam
/// column and the pole rows are duplicated so that indices stay rectangular.
pub fn sphere_points(radius: f32, width_segments: u32, height_segments: u32) -> Vec<Vec3> {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut points = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let x = -radius * (u * 2.0 * PI).cos() * (v * PI).sin();
            let y = radius * (v * PI).cos();
            let z = radius * (u * 2.0 * PI).sin() * (v * PI).sin();
            points.push(Vec3::new(x, y, z));
        }
    }
    points
}

/// Counter-clockwise triangle list for the grid produced by [`sphere_points`].
pub fn sphere_indices(width_segments: u32, height_segments: u32) -> Vec<u32> {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let stride = w + 1;
    let mut indices = Vec::with_capacity((w * (h - 1) * 6) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * stride + ix + 1;
            let b = iy * stride + ix;
            let c = (iy + 1) * stride + ix;
            let d = (iy + 1) * stride + ix + 1;
            // pole rows collapse to a single triangle per quad
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    indices
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Interleaved position/normal vertices plus indices for a lit sphere mesh.
pub fn sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> (Vec<MeshVertex>, Vec<u32>) {
    let vertices = sphere_points(radius, width_segments, height_segments)
        .into_iter()
        .map(|p| MeshVertex {
            position: p.to_array(),
            normal: p.normalize_or_zero().to_array(),
        })
        .collect();
    (vertices, sphere_indices(width_segments, height_segments))
}
