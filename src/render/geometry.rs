//! Vertex types and the static geometry drawn by the lessons.

use std::mem::offset_of;

use glam::{Vec2, Vec3};

use crate::abs::{Vertex, VertexAttribute};

/// A vertex with only a position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct PosVertex {
    pub position: Vec3,
}

impl Vertex for PosVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[VertexAttribute::new(
        0,
        3,
        offset_of!(PosVertex, position),
    )];
}

/// A vertex with a position and a per-vertex colour.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct ColorVertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl Vertex for ColorVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute::new(0, 3, offset_of!(ColorVertex, position)),
        VertexAttribute::new(1, 3, offset_of!(ColorVertex, color)),
    ];
}

/// A vertex with a position, a colour and texture coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct TexturedVertex {
    pub position: Vec3,
    pub color: Vec3,
    pub tex_coords: Vec2,
}

impl Vertex for TexturedVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute::new(0, 3, offset_of!(TexturedVertex, position)),
        VertexAttribute::new(1, 3, offset_of!(TexturedVertex, color)),
        VertexAttribute::new(2, 2, offset_of!(TexturedVertex, tex_coords)),
    ];
}

/// A cube vertex: position followed by texture coordinates, five floats in total.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct CubeVertex {
    pub position: Vec3,
    pub tex_coords: Vec2,
}

impl Vertex for CubeVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute::new(0, 3, offset_of!(CubeVertex, position)),
        VertexAttribute::new(1, 2, offset_of!(CubeVertex, tex_coords)),
    ];
}

const fn pos(x: f32, y: f32, z: f32) -> PosVertex {
    PosVertex {
        position: Vec3::new(x, y, z),
    }
}

const fn colored(position: [f32; 3], color: [f32; 3]) -> ColorVertex {
    ColorVertex {
        position: Vec3::from_array(position),
        color: Vec3::from_array(color),
    }
}

const fn textured(position: [f32; 3], color: [f32; 3], uv: [f32; 2]) -> TexturedVertex {
    TexturedVertex {
        position: Vec3::from_array(position),
        color: Vec3::from_array(color),
        tex_coords: Vec2::from_array(uv),
    }
}

const fn cube(x: f32, y: f32, z: f32, u: f32, v: f32) -> CubeVertex {
    CubeVertex {
        position: Vec3::new(x, y, z),
        tex_coords: Vec2::new(u, v),
    }
}

/// A single triangle in normalized device coordinates, counter-clockwise.
pub const TRIANGLE: [PosVertex; 3] = [
    pos(-0.5, -0.5, 0.0),
    pos(0.5, -0.5, 0.0),
    pos(0.0, 0.5, 0.0),
];

/// The four corners of a rectangle: top right, bottom right, bottom left, top left.
pub const RECTANGLE: [PosVertex; 4] = [
    pos(0.5, 0.5, 0.0),
    pos(0.5, -0.5, 0.0),
    pos(-0.5, -0.5, 0.0),
    pos(-0.5, 0.5, 0.0),
];

/// Two triangles sharing the rectangle's diagonal.
pub const RECTANGLE_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// A triangle with a red, a green and a blue corner.
pub const COLOR_TRIANGLE: [ColorVertex; 3] = [
    colored([0.5, -0.5, 0.0], [1.0, 0.0, 0.0]),
    colored([-0.5, -0.5, 0.0], [0.0, 1.0, 0.0]),
    colored([0.0, 0.5, 0.0], [0.0, 0.0, 1.0]),
];

/// [`RECTANGLE`] with colours and texture coordinates, drawn with [`RECTANGLE_INDICES`].
pub const TEXTURED_RECTANGLE: [TexturedVertex; 4] = [
    textured([0.5, 0.5, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0]),
    textured([0.5, -0.5, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0]),
    textured([-0.5, -0.5, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
    textured([-0.5, 0.5, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0]),
];

/// A unit cube centred on the origin, six faces of two triangles each.
pub const CUBE: [CubeVertex; 36] = [
    // back
    cube(-0.5, -0.5, -0.5, 0.0, 0.0),
    cube(0.5, -0.5, -0.5, 1.0, 0.0),
    cube(0.5, 0.5, -0.5, 1.0, 1.0),
    cube(0.5, 0.5, -0.5, 1.0, 1.0),
    cube(-0.5, 0.5, -0.5, 0.0, 1.0),
    cube(-0.5, -0.5, -0.5, 0.0, 0.0),
    // front
    cube(-0.5, -0.5, 0.5, 0.0, 0.0),
    cube(0.5, -0.5, 0.5, 1.0, 0.0),
    cube(0.5, 0.5, 0.5, 1.0, 1.0),
    cube(0.5, 0.5, 0.5, 1.0, 1.0),
    cube(-0.5, 0.5, 0.5, 0.0, 1.0),
    cube(-0.5, -0.5, 0.5, 0.0, 0.0),
    // left
    cube(-0.5, 0.5, 0.5, 1.0, 0.0),
    cube(-0.5, 0.5, -0.5, 1.0, 1.0),
    cube(-0.5, -0.5, -0.5, 0.0, 1.0),
    cube(-0.5, -0.5, -0.5, 0.0, 1.0),
    cube(-0.5, -0.5, 0.5, 0.0, 0.0),
    cube(-0.5, 0.5, 0.5, 1.0, 0.0),
    // right
    cube(0.5, 0.5, 0.5, 1.0, 0.0),
    cube(0.5, 0.5, -0.5, 1.0, 1.0),
    cube(0.5, -0.5, -0.5, 0.0, 1.0),
    cube(0.5, -0.5, -0.5, 0.0, 1.0),
    cube(0.5, -0.5, 0.5, 0.0, 0.0),
    cube(0.5, 0.5, 0.5, 1.0, 0.0),
    // bottom
    cube(-0.5, -0.5, -0.5, 0.0, 1.0),
    cube(0.5, -0.5, -0.5, 1.0, 1.0),
    cube(0.5, -0.5, 0.5, 1.0, 0.0),
    cube(0.5, -0.5, 0.5, 1.0, 0.0),
    cube(-0.5, -0.5, 0.5, 0.0, 0.0),
    cube(-0.5, -0.5, -0.5, 0.0, 1.0),
    // top
    cube(-0.5, 0.5, -0.5, 0.0, 1.0),
    cube(0.5, 0.5, -0.5, 1.0, 1.0),
    cube(0.5, 0.5, 0.5, 1.0, 0.0),
    cube(0.5, 0.5, 0.5, 1.0, 0.0),
    cube(-0.5, 0.5, 0.5, 0.0, 0.0),
    cube(-0.5, 0.5, -0.5, 0.0, 1.0),
];

/// World positions of the cubes in the final lesson.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];
