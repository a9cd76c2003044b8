//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing mesh data on the GPU side.
//! Vertices should implement the [`Vertex`] trait, which describes where each attribute lives
//! inside the vertex so the layout can be checked before anything is uploaded.

use std::sync::Arc;

use glow::HasContext;

/// A single float attribute inside a vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    /// The `layout (location = N)` the attribute is bound to.
    pub location: u32,
    /// Number of `f32` components, 1 to 4.
    pub components: u32,
    /// Byte offset of the attribute from the start of the vertex.
    pub offset: usize,
}

impl VertexAttribute {
    pub const fn new(location: u32, components: u32, offset: usize) -> Self {
        Self {
            location,
            components,
            offset,
        }
    }

    /// Size of the attribute in bytes.
    pub const fn size(&self) -> usize {
        self.components as usize * size_of::<f32>()
    }
}

/// Trait that defines the attribute layout of a vertex.
pub trait Vertex: Copy {
    /// The attributes of the vertex, ordered by offset.
    const ATTRIBUTES: &'static [VertexAttribute];

    /// Sets up the vertex attribute pointers for the vertex.
    fn vertex_attribs(gl: &glow::Context) {
        let stride = size_of::<Self>() as i32;
        for attribute in Self::ATTRIBUTES {
            unsafe {
                gl.enable_vertex_attrib_array(attribute.location);
                gl.vertex_attrib_pointer_f32(
                    attribute.location,
                    attribute.components as i32,
                    glow::FLOAT,
                    false,
                    stride,
                    attribute.offset as i32,
                );
            }
        }
    }
}

/// Checks that the attribute layout of `V` describes the vertex exactly.
///
/// Attributes must have unique locations, 1 to 4 components, ascending offsets, must not
/// overlap, and must cover the whole vertex so the stride matches the data.
pub fn validate_layout<V: Vertex>() -> Result<(), String> {
    let attributes = V::ATTRIBUTES;
    let stride = size_of::<V>();
    if attributes.is_empty() {
        return Err("vertex layout has no attributes".to_string());
    }

    let mut end = 0;
    for (i, attribute) in attributes.iter().enumerate() {
        if !(1..=4).contains(&attribute.components) {
            return Err(format!(
                "attribute at location {} has {} components",
                attribute.location, attribute.components
            ));
        }
        if attributes[..i]
            .iter()
            .any(|other| other.location == attribute.location)
        {
            return Err(format!(
                "location {} is used more than once",
                attribute.location
            ));
        }
        if attribute.offset < end {
            return Err(format!(
                "attribute at location {} overlaps the previous attribute",
                attribute.location
            ));
        }
        end = attribute.offset + attribute.size();
        if end > stride {
            return Err(format!(
                "attribute at location {} ends at byte {end}, past the {stride} byte vertex",
                attribute.location
            ));
        }
    }

    let covered: usize = attributes.iter().map(VertexAttribute::size).sum();
    if covered != stride {
        return Err(format!(
            "attributes cover {covered} bytes but the vertex is {stride} bytes"
        ));
    }
    Ok(())
}

/// Reinterprets a slice of plain vertex or index data as bytes for upload.
fn as_bytes<T: Copy>(data: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(data.as_ptr() as *const u8, size_of_val(data)) }
}

/// Represents a mesh stored on the GPU side.
pub struct Mesh {
    gl: Arc<glow::Context>,
    draw_mode: u32,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    count: usize,
}

/// Checks vertex and optional index data before anything is uploaded.
pub fn check_mesh_data<V>(vertices: &[V], indices: Option<&[u32]>) -> Result<(), String> {
    if vertices.is_empty() {
        return Err("mesh has no vertices".to_string());
    }
    let Some(indices) = indices else {
        return Ok(());
    };
    if indices.is_empty() {
        return Err("mesh has no indices".to_string());
    }
    if let Some(index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
        return Err(format!(
            "index {index} is out of range for {} vertices",
            vertices.len()
        ));
    }
    Ok(())
}

impl Mesh {
    /// Creates a new indexed mesh from the given vertex and index data.
    pub fn new<V: Vertex>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        indices: &[u32],
        draw_mode: u32,
    ) -> Result<Self, String> {
        Self::build(gl, vertices, Some(indices), draw_mode)
    }

    /// Creates a new mesh that is drawn straight from its vertex array, without indices.
    pub fn new_arrays<V: Vertex>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        draw_mode: u32,
    ) -> Result<Self, String> {
        Self::build(gl, vertices, None, draw_mode)
    }

    fn build<V: Vertex>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        indices: Option<&[u32]>,
        draw_mode: u32,
    ) -> Result<Self, String> {
        check_mesh_data(vertices, indices)?;
        validate_layout::<V>()?;

        unsafe {
            // Every object is created before anything is bound. Once `mesh` exists, an early
            // return drops it and deletes what was created so far.
            let vao = gl.create_vertex_array().map_err(|e| e.to_string())?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(e) => {
                    gl.delete_vertex_array(vao);
                    return Err(e);
                }
            };
            let mut mesh = Self {
                gl: Arc::clone(gl),
                draw_mode,
                vao,
                vbo,
                ebo: None,
                count: indices.map_or(vertices.len(), <[u32]>::len),
            };
            if indices.is_some() {
                mesh.ebo = Some(gl.create_buffer()?);
            }

            gl.bind_vertex_array(Some(mesh.vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(mesh.vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, as_bytes(vertices), glow::STATIC_DRAW);

            if let (Some(ebo), Some(indices)) = (mesh.ebo, indices) {
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                gl.buffer_data_u8_slice(
                    glow::ELEMENT_ARRAY_BUFFER,
                    as_bytes(indices),
                    glow::STATIC_DRAW,
                );
            }

            V::vertex_attribs(gl);

            // The element buffer binding is VAO state, so the VAO goes first.
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            Ok(mesh)
        }
    }

    /// Draws the mesh.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            if self.ebo.is_some() {
                self.gl
                    .draw_elements(self.draw_mode, self.count as i32, glow::UNSIGNED_INT, 0);
            } else {
                self.gl.draw_arrays(self.draw_mode, 0, self.count as i32);
            }
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
            if let Some(ebo) = self.ebo {
                self.gl.delete_buffer(ebo);
            }
            self.gl.delete_vertex_array(self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    #[repr(C)]
    struct Padded {
        position: [f32; 3],
        _pad: f32,
    }

    impl Vertex for Padded {
        const ATTRIBUTES: &'static [VertexAttribute] = &[VertexAttribute::new(0, 3, 0)];
    }

    #[derive(Clone, Copy)]
    #[repr(C)]
    struct Overlapping {
        data: [f32; 5],
    }

    impl Vertex for Overlapping {
        const ATTRIBUTES: &'static [VertexAttribute] = &[
            VertexAttribute::new(0, 3, 0),
            VertexAttribute::new(1, 2, 8),
        ];
    }

    #[derive(Clone, Copy)]
    #[repr(C)]
    struct DuplicateLocation {
        data: [f32; 5],
    }

    impl Vertex for DuplicateLocation {
        const ATTRIBUTES: &'static [VertexAttribute] = &[
            VertexAttribute::new(0, 3, 0),
            VertexAttribute::new(0, 2, 12),
        ];
    }

    #[derive(Clone, Copy)]
    #[repr(C)]
    struct Interleaved {
        data: [f32; 5],
    }

    impl Vertex for Interleaved {
        const ATTRIBUTES: &'static [VertexAttribute] = &[
            VertexAttribute::new(0, 3, 0),
            VertexAttribute::new(1, 2, 12),
        ];
    }

    #[derive(Clone, Copy)]
    #[repr(C)]
    struct Empty {
        data: [f32; 2],
    }

    impl Vertex for Empty {
        const ATTRIBUTES: &'static [VertexAttribute] = &[];
    }

    #[derive(Clone, Copy)]
    #[repr(C)]
    struct Overrun {
        data: [f32; 4],
    }

    impl Vertex for Overrun {
        const ATTRIBUTES: &'static [VertexAttribute] = &[
            VertexAttribute::new(0, 3, 0),
            VertexAttribute::new(1, 2, 12),
        ];
    }

    #[derive(Clone, Copy)]
    #[repr(C)]
    struct Wide {
        data: [f32; 5],
    }

    impl Vertex for Wide {
        const ATTRIBUTES: &'static [VertexAttribute] = &[VertexAttribute::new(0, 5, 0)];
    }

    #[test]
    fn test_interleaved_layout_is_valid() {
        assert_eq!(validate_layout::<Interleaved>(), Ok(()));
    }

    #[test]
    fn test_uncovered_bytes_are_rejected() {
        let err = validate_layout::<Padded>().unwrap_err();
        assert!(err.contains("12 bytes"), "{err}");
    }

    #[test]
    fn test_overlap_is_rejected() {
        let err = validate_layout::<Overlapping>().unwrap_err();
        assert!(err.contains("overlaps"), "{err}");
    }

    #[test]
    fn test_duplicate_location_is_rejected() {
        let err = validate_layout::<DuplicateLocation>().unwrap_err();
        assert!(err.contains("more than once"), "{err}");
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        let err = validate_layout::<Empty>().unwrap_err();
        assert!(err.contains("no attributes"), "{err}");
    }

    #[test]
    fn test_attribute_past_vertex_end_is_rejected() {
        let err = validate_layout::<Overrun>().unwrap_err();
        assert!(err.contains("ends at byte 20"), "{err}");
        assert!(err.contains("16 byte vertex"), "{err}");
    }

    #[test]
    fn test_component_count_is_checked() {
        let err = validate_layout::<Wide>().unwrap_err();
        assert!(err.contains("5 components"), "{err}");
    }

    #[test]
    fn test_mesh_data_checks() {
        let vertices = [Interleaved { data: [0.0; 5] }; 4];
        assert_eq!(check_mesh_data(&vertices, None), Ok(()));
        assert_eq!(check_mesh_data(&vertices, Some(&[0, 1, 3, 1, 2, 3])), Ok(()));

        let err = check_mesh_data::<Interleaved>(&[], None).unwrap_err();
        assert!(err.contains("no vertices"), "{err}");

        let err = check_mesh_data(&vertices, Some(&[])).unwrap_err();
        assert!(err.contains("no indices"), "{err}");

        let err = check_mesh_data(&vertices, Some(&[0, 1, 4])).unwrap_err();
        assert!(err.contains("index 4 is out of range for 4 vertices"), "{err}");
    }

    #[test]
    fn test_as_bytes_length() {
        let indices = [0u32, 1, 3, 1, 2, 3];
        assert_eq!(as_bytes(&indices).len(), 24);
    }
}
