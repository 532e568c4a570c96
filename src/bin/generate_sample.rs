//! Writes a small sample dataset for trying the pipeline: a flat results
//! folder of `ccf_channel_*.json` session files and a folder of `.fcsv`
//! shank tracks.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform jitter in [-spread, spread].
    fn jitter(&mut self, spread: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * spread
    }
}

fn write_session_json(dir: &Path, session: usize, rng: &mut SimpleRng) -> Result<usize> {
    // Approximate MD/PVT/VPM centroids in LPS millimeters.
    let regions = [("MD", 5.7, 5.3, 4.2), ("PVT", 5.6, 5.9, 4.0), ("VPM", 6.9, 5.6, 3.4)];

    let mut channels = serde_json::Map::new();
    let n_channels = 24 + session * 8;
    for ch in 0..n_channels {
        let (region, cx, cy, cz) = regions[ch % regions.len()];
        channels.insert(
            format!("LFP{ch}"),
            json!({
                "brain_region": region,
                "x": cx + rng.jitter(0.3),
                "y": cy + rng.jitter(0.3),
                "z": cz + rng.jitter(0.8),
            }),
        );
    }

    let path = dir.join(format!("ccf_channel_{session}.json"));
    let text = serde_json::to_string_pretty(&serde_json::Value::Object(channels))?;
    fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(n_channels)
}

fn write_shank_fcsv(dir: &Path, probe: char, shank: usize, rng: &mut SimpleRng) -> Result<usize> {
    let path = dir.join(format!("Probe{probe}_Shank{shank}.fcsv"));
    let mut file =
        fs::File::create(&path).with_context(|| format!("writing {}", path.display()))?;

    writeln!(file, "# Markups fiducial file version = 4.11")?;
    writeln!(file, "# CoordinateSystem = LPS")?;
    writeln!(
        file,
        "# columns = id,x,y,z,ow,ox,oy,oz,vis,sel,lock,label,desc,associatedNodeID"
    )?;

    // A roughly vertical track with a little lateral wobble.
    let n_points = 12;
    let (x0, y0) = (5.5 + rng.jitter(0.5), 5.2 + rng.jitter(0.5));
    for i in 0..n_points {
        let z = 1.0 + i as f64 * 0.35;
        writeln!(
            file,
            "P-{i},{:.4},{:.4},{:.4},0,0,0,1,1,1,0,F-{i},,vtkMRMLModelNode4",
            x0 + rng.jitter(0.05),
            y0 + rng.jitter(0.05),
            z,
        )?;
    }
    Ok(n_points)
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    let sessions_dir = Path::new("sample_data/results");
    let tracks_dir = Path::new("sample_data/tracks");
    fs::create_dir_all(sessions_dir)?;
    fs::create_dir_all(tracks_dir)?;

    let mut total = 0;
    for session in 0..3 {
        total += write_session_json(sessions_dir, session, &mut rng)?;
    }
    println!(
        "Wrote 3 session files ({total} channels) to {}",
        sessions_dir.display()
    );

    let mut total = 0;
    for (probe, shanks) in [('A', 2), ('B', 4)] {
        for shank in 1..=shanks {
            total += write_shank_fcsv(tracks_dir, probe, shank, &mut rng)?;
        }
    }
    println!(
        "Wrote 6 shank tracks ({total} points) to {}",
        tracks_dir.display()
    );

    Ok(())
}
