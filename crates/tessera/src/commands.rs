//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use tessera_mesh::{primitives, MeshInfo, Model, Session, Transform};
use tessera_shared::Point3;
use tessera_voxel::{voxelize_parallel, VoxelizeConfig};

/// Flags of `tessera voxelize`; `None` keeps the config value.
pub struct VoxelizeArgs {
    /// TOML config file.
    pub config: Option<PathBuf>,
    /// Cells per axis.
    pub resolution: Option<i64>,
    /// Source cube edge.
    pub edge: Option<f32>,
    /// Worker threads.
    pub threads: Option<usize>,
    /// Output path.
    pub output: Option<PathBuf>,
    /// Writer format name.
    pub format: Option<String>,
}

impl VoxelizeArgs {
    /// Overrides config values with the flags that were given.
    pub fn apply(&self, config: &mut VoxelizeConfig) {
        if let Some(resolution) = self.resolution {
            config.resolution = resolution;
        }
        if let Some(edge) = self.edge {
            config.source_edge = edge;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if let Some(output) = &self.output {
            config.output.clone_from(output);
        }
        if let Some(format) = &self.format {
            config.format.clone_from(format);
        }
    }
}

fn write_model(session: &Session, model: &Model, format: &str, path: &Path) -> anyhow::Result<()> {
    let writer = session
        .query_writer(format)
        .with_context(|| format!("no writer for format `{format}`"))?;
    writer
        .write_to_file(model, path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// `tessera box`
pub fn build_box(size: [f32; 3], output: &Path, format: &str) -> anyhow::Result<()> {
    let session = Session::new();
    let mut model = session.create_model();

    let mesh = primitives::box_mesh("Box", Point3::ZERO, Point3::from(size))?;
    let id = model.add_mesh(mesh)?;
    model.add_build_item(id, Transform::IDENTITY)?;

    write_model(&session, &model, format, output)?;
    println!("Wrote box {} x {} x {} to {}", size[0], size[1], size[2], output.display());
    Ok(())
}

/// `tessera voxelize`
pub fn voxelize(args: &VoxelizeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => VoxelizeConfig::load(path)?,
        None => VoxelizeConfig::default(),
    };
    args.apply(&mut config);
    if !(config.source_edge.is_finite() && config.source_edge > 0.0) {
        bail!("source edge must be a positive number, got {}", config.source_edge);
    }

    let session = Session::new();
    let mut model = session.create_model();

    let source = primitives::centered_cube(config.source_name.as_str(), config.source_edge)?;
    log::info!(
        "Created source mesh with {} vertices and {} triangles",
        source.vertex_count(),
        source.triangle_count()
    );
    let source_id = model.add_mesh(source.clone())?;
    model.add_build_item(source_id, Transform::IDENTITY)?;

    let count = voxelize_parallel(&source, config.resolution, &mut model, config.threads)?;

    write_model(&session, &model, &config.format, &config.output)?;
    println!(
        "Saved model with {count} volumetric cubes to: {}",
        config.output.display()
    );
    Ok(())
}

fn format_point(p: Point3) -> String {
    format!("({:.3}, {:.3}, {:.3})", p.x, p.y, p.z)
}

/// `tessera inspect`
pub fn inspect(path: &Path) -> anyhow::Result<()> {
    let session = Session::new();
    let size = std::fs::metadata(path)
        .with_context(|| format!("cannot open {}", path.display()))?
        .len();
    let model = session.read_model(path)?;

    println!("TESSERA Model Inspector");
    println!("───────────────────────");
    println!("File:        {}", path.display());
    println!("Size:        {size} bytes");
    println!("Objects:     {}", model.object_count());
    println!("Vertices:    {}", model.total_vertex_count());
    println!("Triangles:   {}", model.total_triangle_count());
    println!("Colors:      {}", model.colors().len());
    println!("Build items: {}", model.build_items().len());

    for summary in model.object_summaries() {
        let info = MeshInfo::of(model.object(summary.id)?);
        println!();
        println!("[{}] {}", summary.id.0, summary.name);
        println!("  vertices:   {}", summary.vertex_count);
        println!("  triangles:  {}", summary.triangle_count);
        if let Some(bounds) = info.bounds {
            println!("  bounds:     {} .. {}", format_point(bounds.min), format_point(bounds.max));
        }
        println!("  volume:     {:.3}", info.volume);
        if let Some(center) = info.center_of_mass {
            println!("  center:     {}", format_point(center));
        }
        println!("  watertight: {}", if info.watertight { "yes" } else { "no" });
    }

    if !model.build_items().is_empty() {
        println!();
        println!("Build:");
    }
    for item in model.build_items() {
        let name = &model.object(item.object)?.name;
        let placement = if item.transform.is_identity() { "identity" } else { "transformed" };
        print!("  [{}] {name} ({placement})", item.object.0);
        match model.placed_bounds(item)? {
            Some(bounds) => println!(" {} .. {}", format_point(bounds.min), format_point(bounds.max)),
            None => println!(),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_mesh::ModelError;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tessera_cli_{}_{name}", std::process::id()))
    }

    fn no_flags() -> VoxelizeArgs {
        VoxelizeArgs {
            config: None,
            resolution: None,
            edge: None,
            threads: None,
            output: None,
            format: None,
        }
    }

    fn is_unsupported_format(err: &anyhow::Error) -> bool {
        err.chain().any(|cause| {
            matches!(cause.downcast_ref::<ModelError>(), Some(ModelError::UnsupportedFormat(_)))
        })
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = VoxelizeConfig::default();
        let args = VoxelizeArgs {
            resolution: Some(3),
            threads: Some(2),
            format: Some("3mf".to_string()),
            ..no_flags()
        };
        args.apply(&mut config);

        assert_eq!(config.resolution, 3);
        assert_eq!(config.threads, 2);
        assert_eq!(config.format, "3mf");
        assert_eq!(config.source_edge, 10.0);
        assert_eq!(config.output, PathBuf::from("volumetric_model_with_voxels.json"));
    }

    #[test]
    fn test_missing_flags_keep_config() {
        let mut config = VoxelizeConfig::from_toml_str("format = \"json\"\nresolution = 5").unwrap();
        let expected = config.clone();
        no_flags().apply(&mut config);
        assert_eq!(config, expected);
    }

    #[test]
    fn test_box_format_flag() {
        let path = scratch_path("box.json");
        build_box([1.0, 2.0, 3.0], &path, "json").unwrap();
        let model = Session::new().read_model(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(model.object_count(), 1);

        let err = build_box([1.0, 2.0, 3.0], &scratch_path("box.3mf"), "3mf").unwrap_err();
        assert!(is_unsupported_format(&err), "{err:#}");
    }

    #[test]
    fn test_voxelize_format_flag() {
        let path = scratch_path("voxels.json");
        let args = VoxelizeArgs {
            resolution: Some(2),
            output: Some(path.clone()),
            format: Some("json".to_string()),
            ..no_flags()
        };
        voxelize(&args).unwrap();
        let model = Session::new().read_model(&path).unwrap();
        std::fs::remove_file(&path).ok();
        // Source cube plus 2x2x2 voxels.
        assert_eq!(model.object_count(), 9);

        let args = VoxelizeArgs {
            resolution: Some(2),
            output: Some(scratch_path("voxels.3mf")),
            format: Some("3mf".to_string()),
            ..no_flags()
        };
        let err = voxelize(&args).unwrap_err();
        assert!(is_unsupported_format(&err), "{err:#}");
    }
}
