use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use album_store::AlbumStore;
use pdf_album::ExportOptions;

#[derive(Parser)]
#[command(name = "albt", about = "Image album PDF tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List albums
    Albums {
        /// Album storage root directory
        #[arg(long, default_value = "uploads")]
        root: PathBuf,
    },

    /// List the images in an album
    Images {
        /// Album storage root directory
        #[arg(long, default_value = "uploads")]
        root: PathBuf,

        /// Album name
        album: String,
    },

    /// Export an album as a PDF, one page per image
    Export {
        /// Album storage root directory
        #[arg(long, default_value = "uploads")]
        root: PathBuf,

        /// Album name
        album: String,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Ordered image selection (default: every image, sorted by name)
        #[arg(long, num_args = 1..)]
        images: Vec<String>,

        /// Page size
        #[arg(long, default_value = "a4", value_enum)]
        page_size: PageSizeArg,

        /// Page orientation
        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Page margin in points
        #[arg(long, default_value = "40.0")]
        margin: f32,

        /// Advisory quality factor (0 to 1)
        #[arg(long, default_value = "0.8")]
        quality: f32,

        /// Load export options from a JSON file instead of the flags above
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSizeArg {
    A4,
    Letter,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PageSizeArg> for pdf_album::PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::A4 => Self::A4,
            PageSizeArg::Letter => Self::Letter,
        }
    }
}

impl From<OrientationArg> for pdf_album::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Albums { root } => {
            let store = AlbumStore::new(root);
            for album in store.list_albums().await? {
                println!("{album}");
            }
        }

        Commands::Images { root, album } => {
            let store = AlbumStore::new(root);
            for entry in store.list_images(&album).await? {
                println!(
                    "{} ({:?}, {} bytes)",
                    entry.name, entry.format, entry.size_bytes
                );
            }
        }

        Commands::Export {
            root,
            album,
            output,
            images,
            page_size,
            orientation,
            margin,
            quality,
            config,
        } => {
            let options = match config {
                Some(path) => ExportOptions::load(&path).await?,
                None => ExportOptions {
                    page_size: page_size.into(),
                    orientation: orientation.into(),
                    margin_pt: margin,
                    quality,
                },
            };

            let store = AlbumStore::new(root);
            let names = if images.is_empty() {
                store
                    .list_images(&album)
                    .await?
                    .into_iter()
                    .map(|entry| entry.name)
                    .collect()
            } else {
                images
            };

            let inputs = store.load_images(&album, &names).await?;
            let count = inputs.len();
            let bytes = pdf_album::export(inputs, options).await?;
            tokio::fs::write(&output, bytes).await?;
            println!("Exported {} images → {}", count, output.display());
        }
    }

    Ok(())
}
