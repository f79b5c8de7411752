use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pdf_notebook::constants::pt_to_mm;
use pdf_notebook::layout::{DrawInstruction, PageKind, StrokeStyle};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfnb", about = "Ruled notebook PDF generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a notebook PDF
    Generate {
        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Document title stored in the PDF
        #[arg(long, default_value = "Notebook")]
        title: String,

        /// Author name
        #[arg(long, default_value = "")]
        author: String,

        /// Subject name
        #[arg(long, default_value = "")]
        subject: String,

        /// Course name
        #[arg(long, default_value = "")]
        course: String,

        /// Copyright holder
        #[arg(long, default_value = "")]
        copyright: String,

        /// Contact line
        #[arg(long, default_value = "")]
        contacts: String,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show the page layout without writing a PDF
    Layout {
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// JSON options file; other flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ruled pages
    #[arg(short, long)]
    pages: Option<usize>,

    /// Page template
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,

    /// Paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Paper orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Grid cell side in mm
    #[arg(long)]
    cell_mm: Option<f32>,

    /// TrueType/OpenType font to embed instead of Helvetica
    #[arg(long)]
    font: Option<PathBuf>,

    /// Leave out the Cornell rules
    #[arg(long)]
    no_cornell: bool,

    /// Leave out the title page
    #[arg(long)]
    no_title: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Digital,
    Paper,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<VariantArg> for pdf_notebook::LayoutVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Digital => Self::digital(),
            VariantArg::Paper => Self::paper(),
        }
    }
}

impl From<PaperArg> for pdf_notebook::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for pdf_notebook::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl LayoutArgs {
    async fn into_options(self) -> Result<pdf_notebook::NotebookOptions> {
        let mut options = match &self.config {
            Some(path) => pdf_notebook::NotebookOptions::load(path).await?,
            None => pdf_notebook::NotebookOptions::default(),
        };

        if let Some(pages) = self.pages {
            options.pages_count = pages;
        }
        if let Some(variant) = self.variant {
            options.variant = variant.into();
        }
        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            options.orientation = orientation.into();
        }
        if let Some(cell_mm) = self.cell_mm {
            options.cell_side_mm = cell_mm;
        }
        if let Some(font) = self.font {
            options.font = pdf_notebook::FontSource::File(font);
        }
        if self.no_cornell {
            options.draw_cornell = false;
        }
        if self.no_title {
            options.generate_title = false;
        }

        log::debug!("Resolved options: {:?}", options);
        Ok(options)
    }
}

fn print_layout(pages: &[pdf_notebook::layout::PageLayout]) {
    let Some(first) = pages.first() else {
        return;
    };
    println!("Layout:");
    println!(
        "  Page: {:.2} x {:.2} pt ({:.1} x {:.1} mm)",
        first.geometry.width,
        first.geometry.height,
        pt_to_mm(first.geometry.width),
        pt_to_mm(first.geometry.height)
    );
    println!(
        "  Pages: {} ({} title)",
        pages.len(),
        pages.iter().filter(|p| p.kind == PageKind::Title).count()
    );

    let Some(regular) = pages.iter().find(|p| p.kind == PageKind::Regular) else {
        return;
    };
    if let Some(grid) = regular.grid {
        println!(
            "  Grid: {:.2} x {:.2} pt at ({:.2}, {:.2})",
            grid.width, grid.height, grid.x, grid.y
        );
        println!(
            "  Margins: left {:.2}, right {:.2}, bottom {:.2}, top {:.2}",
            grid.left(),
            first.geometry.width - grid.right(),
            grid.bottom(),
            first.geometry.height - grid.top()
        );
    }

    let count_lines = |style: StrokeStyle| {
        regular
            .instructions
            .iter()
            .filter(|i| matches!(i, DrawInstruction::Line { style: s, .. } if *s == style))
            .count()
    };
    println!("  Grid lines: {}", count_lines(StrokeStyle::GRID));
    println!("  Cornell rules: {}", count_lines(StrokeStyle::CORNELL));
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            title,
            author,
            subject,
            course,
            copyright,
            contacts,
            layout,
        } => {
            let options = layout.into_options().await?;
            let content = pdf_notebook::NotebookContent {
                title,
                author_name: author,
                subject_name: subject,
                course_name: course,
                copyright,
                contacts,
            };

            pdf_notebook::generate_pdf(&content, &options, &output).await?;
            println!("Generated notebook → {}", output.display());
        }

        Commands::Layout { layout } => {
            let options = layout.into_options().await?;
            let font = pdf_notebook::FontResource::load(&options.font)
                .await?
                .acquire()?;
            let academic_year =
                pdf_notebook::academic_year_in(chrono::Utc::now(), options.utc_offset()?);
            let metadata = pdf_notebook::PageMetadata {
                academic_year,
                ..Default::default()
            };

            let pages = pdf_notebook::layout_document(&metadata, &options, &font)?;
            print_layout(&pages);
        }
    }

    Ok(())
}
