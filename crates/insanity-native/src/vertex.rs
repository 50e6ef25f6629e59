use insanity_core::CircleInstance;

/// Buffer layout of a vertex type as seen by `POINTS_WGSL`.
pub trait VertexLayout {
    fn layout() -> wgpu::VertexBufferLayout<'static>;
}

/// Corner of the unit quad every circle is stamped onto, in [-0.5, 0.5].
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadCorner {
    pub pos: [f32; 2],
}

// Two triangles
pub const QUAD_CORNERS: [QuadCorner; 6] = [
    QuadCorner { pos: [-0.5, -0.5] },
    QuadCorner { pos: [0.5, -0.5] },
    QuadCorner { pos: [0.5, 0.5] },
    QuadCorner { pos: [-0.5, -0.5] },
    QuadCorner { pos: [0.5, 0.5] },
    QuadCorner { pos: [-0.5, 0.5] },
];

const QUAD_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const CIRCLE_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![1 => Float32x2, 2 => Float32];

impl VertexLayout for QuadCorner {
    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadCorner>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &QUAD_ATTRIBUTES,
        }
    }
}

impl VertexLayout for CircleInstance {
    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &CIRCLE_ATTRIBUTES,
        }
    }
}
