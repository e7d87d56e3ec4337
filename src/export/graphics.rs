//! Plain-text geometry dump for plotting tools.
//!
//! One primitive per block, blocks separated by a blank line, one `x y z`
//! point per line (longitude, latitude, height):
//!
//! ```text
//! #X  Y  Z
//! #Flower
//! 56 37 0.0
//! 56 37 2.0
//!
//! #SunVector
//! ...
//! ```

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use crate::atmosphere::{Cloud, Sun};
use crate::lamp::Lamp;

/// Length of the drawn sun ray.
const SUN_RAY_LENGTH: f64 = 50.0;

/// Render the lamp, sun ray and cloud outlines.
pub fn render_graphics(lamp: &Lamp, sun: &Sun, clouds: &[Cloud]) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_blocks(&mut out, lamp, sun, clouds);
    out
}

fn write_blocks(out: &mut String, lamp: &Lamp, sun: &Sun, clouds: &[Cloud]) -> std::fmt::Result {
    let lon = lamp.longitude;
    let lat = lamp.latitude;

    writeln!(out, "#X  Y  Z")?;
    writeln!(out, "#Flower")?;
    writeln!(out, "{} {} 0.0", lon, lat)?;
    writeln!(out, "{} {} 2.0", lon, lat)?;
    writeln!(out)?;

    let ray = sun.direction() * SUN_RAY_LENGTH;
    writeln!(out, "#SunVector")?;
    writeln!(out, "{} {} 0.0", lon, lat)?;
    writeln!(out, "{} {} {}", lon + ray.x, lat + ray.y, ray.z)?;
    writeln!(out)?;

    for cloud in clouds {
        let corners = cloud.footprint().corners();
        writeln!(out, "#Cloud")?;
        for corner in corners.iter().chain(corners.first()) {
            writeln!(out, "{} {} {}", corner.x, corner.y, cloud.height)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the geometry dump to `path`, creating parent directories.
pub async fn save_graphics(path: &Path, lamp: &Lamp, sun: &Sun, clouds: &[Cloud]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, render_graphics(lamp, sun, clouds)).await?;
    log::info!("Wrote geometry to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_blocks() {
        let lamp = Lamp::new(37.0, 56.0);
        let sun = Sun::fixed(90.0, 0.0);
        let clouds = [Cloud::new(50.0, -10.0, 20.0, 30.0, 10.0)];
        let text = render_graphics(&lamp, &sun, &clouds);

        let blocks: Vec<&str> = text.trim_end().split("\n\n").collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], "#X  Y  Z\n#Flower\n56 37 0.0\n56 37 2.0");
        assert!(blocks[1].starts_with("#SunVector\n56 37 0.0\n"));
        assert!(blocks[1].ends_with(" 50"), "sun ray should end at height 50: {}", blocks[1]);
        assert_eq!(
            blocks[2],
            "#Cloud\n40 -25 10\n60 -25 10\n60 5 10\n40 5 10\n40 -25 10"
        );
    }

    #[test]
    fn test_one_block_per_cloud() {
        let lamp = Lamp::new(0.0, 0.0);
        let sun = Sun::fixed(30.0, 90.0);
        let clouds = [
            Cloud::new(0.0, 0.0, 1.0, 1.0, 1.0),
            Cloud::new(5.0, 5.0, 2.0, 2.0, 3.0),
        ];
        let text = render_graphics(&lamp, &sun, &clouds);
        assert_eq!(text.matches("#Cloud").count(), 2);
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_no_clouds() {
        let text = render_graphics(&Lamp::new(0.0, 0.0), &Sun::fixed(10.0, 0.0), &[]);
        assert!(!text.contains("#Cloud"));
        assert!(text.contains("#SunVector"));
    }

    #[tokio::test]
    async fn test_save_graphics() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("graphicsdata.d");
        let lamp = Lamp::new(37.0, 56.0);
        let sun = Sun::fixed(45.0, 180.0);
        save_graphics(&path, &lamp, &sun, &[]).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_graphics(&lamp, &sun, &[]));
    }
}
