//! File plumbing around the renderer: memory-mapped input and PNG output.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::ops::Deref;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};
use memmap2::Mmap;

use crate::error::Result;
use crate::report::Reporter;
use crate::util::format_bytes;
use crate::viz::{render_with, RenderOptions};

/// Contents of an input file.
///
/// Non-empty files are memory-mapped. Zero-length files are not mapped at all,
/// since some platforms refuse to map them.
#[derive(Debug)]
pub enum FileData {
    Mapped(Mmap),
    Empty,
}

impl Deref for FileData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            FileData::Mapped(mmap) => mmap,
            FileData::Empty => &[],
        }
    }
}

/// Open `path` and map its whole contents into memory.
pub fn load_file(path: &Path) -> Result<FileData> {
    let file = File::open(path)?;
    let size = file.metadata()?.len();

    if size == 0 {
        log::trace!("{} is empty", path.display());
        return Ok(FileData::Empty);
    }

    // Safety: the mapping is read-only and lives only for this run. Like any
    // mmap, it assumes no other process truncates the file meanwhile.
    let mmap = unsafe { Mmap::map(&file)? };
    log::trace!("mapped {} ({})", path.display(), format_bytes(size));

    Ok(FileData::Mapped(mmap))
}

/// Create `path` exclusively for writing, owner-readable only on Unix.
///
/// Fails with [`std::io::ErrorKind::AlreadyExists`] if `path` exists; the
/// existing file is left untouched.
fn create_output(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    Ok(options.open(path)?)
}

/// Run `produce` against a freshly created output file and flush it.
///
/// On any error the file at `path` is removed again, so a failed run leaves
/// nothing behind.
fn fill_output<F>(path: &Path, file: File, produce: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let mut writer = BufWriter::new(file);
    let result = produce(&mut writer).and_then(|()| Ok(writer.flush()?));
    drop(writer);

    if let Err(err) = result {
        if let Err(cleanup) = fs::remove_file(path) {
            log::warn!("could not remove partial {}: {cleanup}", path.display());
        }
        return Err(err);
    }
    Ok(())
}

/// Encode `image` as PNG into `path`.
///
/// The file is created exclusively: if `path` already exists this fails with
/// an [`std::io::ErrorKind::AlreadyExists`] error and the existing file is left
/// untouched. If encoding fails after creation, the partial file is removed.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = create_output(path)?;
    fill_output(path, file, |writer| encode_png(image, writer))
}

fn encode_png<W: Write>(image: &RgbaImage, writer: W) -> Result<()> {
    PngEncoder::new(writer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    log::info!("encoded {}x{} image", image.width(), image.height());
    Ok(())
}

/// Read `input`, render it, and write the canvas to `output` as PNG.
///
/// The output is created before the input is touched, so an existing output
/// fails the run before any data is read or reported. If reading, rendering or
/// encoding fails afterwards, the new output file is removed again.
pub fn visualize_file(
    input: &Path,
    output: &Path,
    options: &RenderOptions,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let file = create_output(output)?;
    fill_output(output, file, |writer| {
        let data = load_file(input)?;
        let image = render_with(&data, options, reporter)?;
        encode_png(&image, writer)
    })?;
    log::info!("wrote {}", output.display());
    Ok(())
}
