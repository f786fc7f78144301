use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use fish_predictor::artifact::{
    ArtifactPaths, ArtifactStore, ClassLabel, DecisionTree, LabelEncoder, LoadStatus, TreeNode,
};
use fish_predictor::data::features::{FeatureVector, MeasurementForm};
use fish_predictor::predict::Predictor;
use fish_predictor::PRESETS;
use serde::Serialize;

/// Write a demo model and label encoder so the form can be tried without a
/// training run.
#[derive(Parser, Debug)]
#[command(name = "generate_artifacts")]
struct Args {
    /// Output folder
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Overwrite existing files
    #[arg(short, long)]
    force: bool,
}

const LENGTH: usize = 0;
const WEIGHT: usize = 1;
const RATIO: usize = 2;

/// Hand-built tree that separates the preset fish.
fn demo_tree(encoder: &LabelEncoder) -> Result<DecisionTree> {
    let class = |name: &str| -> Result<TreeNode> {
        let ClassLabel(idx) = encoder
            .transform(name)
            .with_context(|| format!("species '{name}' missing from encoder"))?;
        Ok(TreeNode::leaf(idx))
    };

    // Short, light fish are told apart by their ratio.
    let small = TreeNode::split(
        RATIO,
        0.07,
        class("Bream")?,
        TreeNode::split(
            RATIO,
            0.1,
            TreeNode::split(RATIO, 0.0828, class("Trout")?, class("Perch")?),
            class("Roach")?,
        ),
    );
    let medium = TreeNode::split(LENGTH, 40.0, small, class("Pike")?);
    let heavy = TreeNode::split(WEIGHT, 1075.0, medium, class("Common Carp")?);
    let root = TreeNode::split(WEIGHT, 1600.0, heavy, class("Salmon")?);

    Ok(DecisionTree::new(encoder.len(), root))
}

fn write_json<T: Serialize>(path: &Path, value: &T, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("writing {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let paths = ArtifactPaths::in_dir(&args.out_dir);

    let encoder = LabelEncoder::fit(PRESETS.iter().map(|p| p.name));
    let tree = demo_tree(&encoder)?;
    tree.validate().map_err(anyhow::Error::msg).context("demo tree is invalid")?;

    write_json(&paths.model, &tree, args.force)?;
    write_json(&paths.encoder, &encoder, args.force)?;
    log::info!(
        "Wrote {} ({} nodes) and {} ({} classes)",
        paths.model.display(),
        tree.root.node_count(),
        paths.encoder.display(),
        encoder.len()
    );

    // Read the files back the way the form does and check every preset.
    let mut predictor = Predictor::new(ArtifactStore::new(paths.clone()));
    for preset in &PRESETS {
        let features: FeatureVector = MeasurementForm::from_preset(preset).feature_vector();
        let report = predictor.predict(&features);
        if let LoadStatus::Failed(e) = report.load.model {
            bail!("written model does not load: {e}");
        }
        let prediction = report.result.context("predicting preset")?;
        if prediction.species.as_deref() != Some(preset.name) {
            bail!(
                "preset {} predicted as {}",
                preset.name,
                prediction.display_name()
            );
        }
    }

    println!(
        "Wrote {} and {} ({} species)",
        paths.model.display(),
        paths.encoder.display(),
        encoder.len()
    );
    Ok(())
}
