use std::path::Path;

use ndarray::Array2;
use vtkio::{
    Vtk,
    model::{
        Attribute, Attributes, ByteOrder, CellType, Cells, DataArray, DataSet, ElementType,
        IOBuffer, UnstructuredGridPiece, Version, VertexNumbers,
    },
};

use crate::{disc::grid::UniformGrid, error::SolverResult};

/// Writes the velocity field as an unstructured grid of quads with the
/// vector `velocity` and scalar `magnitude` attached to the points.
pub fn write_velocity_field<P: AsRef<Path>>(
    u: &Array2<f64>,
    v: &Array2<f64>,
    grid: &UniformGrid,
    filename: P,
) -> SolverResult<()> {
    let vtk_file = velocity_field_vtk(u, v, grid);
    vtk_file.export(filename.as_ref())?;
    Ok(())
}

fn velocity_field_vtk(u: &Array2<f64>, v: &Array2<f64>, grid: &UniformGrid) -> Vtk {
    let (ny, nx) = (grid.ny, grid.nx);
    let x_coords = grid.x_coords();
    let y_coords = grid.y_coords();
    let mut vtk_points = Vec::with_capacity(nx * ny * 3);
    let mut velocity = Vec::with_capacity(nx * ny * 3);
    let mut magnitude = Vec::with_capacity(nx * ny);
    // point id = i * nx + j
    for i in 0..ny {
        for j in 0..nx {
            vtk_points.push(x_coords[j]);
            vtk_points.push(y_coords[i]);
            vtk_points.push(0.0); // Z-coordinate
            let (ui, vi) = (u[(i, j)], v[(i, j)]);
            velocity.extend([ui, vi, 0.0]);
            magnitude.push((ui * ui + vi * vi).sqrt());
        }
    }

    let num_cells = (nx - 1) * (ny - 1);
    let mut connectivity = Vec::with_capacity(num_cells * 4);
    for i in 0..ny - 1 {
        for j in 0..nx - 1 {
            let p0 = (i * nx + j) as u64;
            let p3 = ((i + 1) * nx + j) as u64;
            // counter-clockwise
            connectivity.extend([p0, p0 + 1, p3 + 1, p3]);
        }
    }

    Vtk {
        version: Version::XML { major: 1, minor: 0 },
        title: "Velocity Field".into(),
        byte_order: ByteOrder::native(),
        data: DataSet::inline(UnstructuredGridPiece {
            points: IOBuffer::F64(vtk_points),
            cells: Cells {
                cell_verts: VertexNumbers::XML {
                    connectivity,
                    offsets: (0..num_cells).map(|i| ((i + 1) * 4) as u64).collect(),
                },
                types: vec![CellType::Quad; num_cells],
            },
            data: Attributes {
                point: vec![
                    Attribute::DataArray(DataArray {
                        name: "velocity".to_string(),
                        elem: ElementType::Vectors,
                        data: IOBuffer::F64(velocity),
                    }),
                    Attribute::DataArray(DataArray {
                        name: "magnitude".to_string(),
                        elem: ElementType::Scalars {
                            num_comp: 1,
                            lookup_table: None,
                        },
                        data: IOBuffer::F64(magnitude),
                    }),
                ],
                cell: vec![],
            },
        }),
        file_path: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_connectivity() {
        let grid = UniformGrid::new(1.0, 1.0, 3, 4).unwrap();
        let u = Array2::<f64>::ones((4, 3));
        let vtk = velocity_field_vtk(&u, &u, &grid);
        let DataSet::UnstructuredGrid { pieces, .. } = vtk.data else {
            panic!("expected an unstructured grid");
        };
        let vtkio::model::Piece::Inline(piece) = &pieces[0] else {
            panic!("expected an inline piece");
        };
        assert_eq!(piece.points.len(), 12 * 3);
        assert_eq!(piece.cells.types.len(), 6);
        let VertexNumbers::XML {
            connectivity,
            offsets,
        } = &piece.cells.cell_verts
        else {
            panic!("expected xml vertex numbers");
        };
        assert_eq!(&connectivity[..4], &[0, 1, 4, 3]);
        assert_eq!(offsets.last(), Some(&24));
    }

    #[test]
    fn test_export_file() {
        let grid = UniformGrid::new(2.0, 2.0, 5, 5).unwrap();
        let u = Array2::<f64>::ones((5, 5));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.vtu");
        write_velocity_field(&u, &u, &grid, &path).unwrap();

        let vtk = Vtk::import(&path).unwrap();
        let DataSet::UnstructuredGrid { pieces, .. } = vtk.data else {
            panic!("expected an unstructured grid");
        };
        let vtkio::model::Piece::Inline(piece) = &pieces[0] else {
            panic!("expected an inline piece");
        };
        assert_eq!(piece.points.len(), 25 * 3);
        assert_eq!(piece.cells.types.len(), 16);
        let velocity = piece
            .data
            .point
            .iter()
            .find_map(|attrib| match attrib {
                Attribute::DataArray(array) if array.name == "velocity" => Some(array),
                _ => None,
            })
            .expect("velocity array missing");
        assert_eq!(velocity.data.len(), 25 * 3);
        assert!(piece.data.point.iter().any(
            |attrib| matches!(attrib, Attribute::DataArray(array) if array.name == "magnitude")
        ));
    }
}
