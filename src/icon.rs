// src/icon.rs
use crate::error::{Error, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Entry sizes written to the container, smallest first
pub const ICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Largest side an ICO directory entry can describe
const MAX_ENTRY_SIZE: u32 = 256;

/// Downsample `master` to each usable size and collect the entries.
///
/// Sizes larger than the master or outside the ICO range are skipped.
pub fn build_icon_dir(master: &RgbaImage, sizes: &[u32]) -> Result<IconDir> {
    let side = master.width().min(master.height());
    let mut dir = IconDir::new(ResourceType::Icon);

    for &size in sizes {
        if size == 0 || size > MAX_ENTRY_SIZE || size > side {
            debug!("skipping {size}x{size} entry for {side}px master");
            continue;
        }

        let frame = if master.dimensions() == (size, size) {
            master.clone()
        } else {
            imageops::resize(master, size, size, FilterType::Lanczos3)
        };

        let image = IconImage::from_rgba_data(size, size, frame.into_raw());
        dir.add_entry(IconDirEntry::encode(&image)?);
        debug!("encoded {size}x{size} entry");
    }

    if dir.entries().is_empty() {
        return Err(Error::NoEntries {
            master: side,
            requested: sizes.to_vec(),
        });
    }
    Ok(dir)
}

/// Write `master` to `path` as a multi-resolution icon
pub fn write_icon(master: &RgbaImage, sizes: &[u32], path: &Path) -> Result<()> {
    let dir = build_icon_dir(master, sizes)?;

    let mut writer = BufWriter::new(File::create(path)?);
    dir.write(&mut writer)?;
    writer.flush()?;

    info!("wrote {} entries to {}", dir.entries().len(), path.display());
    Ok(())
}

/// Dimensions of every entry stored in the icon at `path`
pub fn read_entries(path: &Path) -> Result<Vec<(u32, u32)>> {
    let dir = IconDir::read(BufReader::new(File::open(path)?))?;
    Ok(dir
        .entries()
        .iter()
        .map(|entry| (entry.width(), entry.height()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo::{render, ACCENT, BACKGROUND};
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sawtooth-favicon-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_build_icon_dir_all_sizes() {
        let master = render(256);
        let dir = build_icon_dir(&master, &ICON_SIZES).unwrap();

        let sizes: Vec<(u32, u32)> = dir
            .entries()
            .iter()
            .map(|e| (e.width(), e.height()))
            .collect();
        assert_eq!(
            sizes,
            vec![(16, 16), (32, 32), (48, 48), (64, 64), (128, 128), (256, 256)]
        );
    }

    #[test]
    fn test_build_icon_dir_skips_oversized() {
        let master = render(64);
        let dir = build_icon_dir(&master, &ICON_SIZES).unwrap();
        assert_eq!(dir.entries().len(), 4);
        assert!(dir.entries().iter().all(|e| e.width() <= 64));
    }

    #[test]
    fn test_build_icon_dir_no_entries() {
        let master = render(8);
        let err = build_icon_dir(&master, &[16, 32]).unwrap_err();
        assert!(matches!(err, Error::NoEntries { master: 8, .. }));
    }

    #[test]
    fn test_full_size_entry_matches_master() {
        let master = render(256);
        let dir = build_icon_dir(&master, &[256]).unwrap();
        let decoded = dir.entries()[0].decode().unwrap();
        assert_eq!(decoded.rgba_data(), master.as_raw().as_slice());
    }

    #[test]
    fn test_downsampled_entry_keeps_colors() {
        let master = render(256);
        let dir = build_icon_dir(&master, &[32]).unwrap();
        let decoded = dir.entries()[0].decode().unwrap();
        let data = decoded.rgba_data();

        // top-left corner is far from any stroke
        for (got, want) in data[..4].iter().zip(BACKGROUND.0.iter()) {
            assert!(got.abs_diff(*want) <= 1, "corner {got} vs {want}");
        }
        // the first vertex disc stays dominated by the accent after resizing
        let idx = ((20 * 32 + 4) * 4) as usize;
        assert!(data[idx] > 128, "red {}", data[idx]);
        assert!(data[idx] > data[idx + 1]);
        assert_eq!(data[idx + 3], ACCENT.0[3]);
    }

    #[test]
    fn test_write_and_read_back() {
        let path = temp_path("roundtrip.ico");
        write_icon(&render(256), &ICON_SIZES, &path).unwrap();

        let entries = read_entries(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(entries.len(), 6);
        for (&(w, h), &size) in entries.iter().zip(ICON_SIZES.iter()) {
            assert_eq!((w, h), (size, size));
        }
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let path = temp_path("missing-dir").join("icon.ico");
        let err = write_icon(&render(16), &[16], &path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_read_entries_rejects_garbage() {
        let path = temp_path("garbage.ico");
        std::fs::write(&path, b"not an icon").unwrap();
        let result = read_entries(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
