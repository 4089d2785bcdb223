//! Figure geometry.
//!
//! Every instruction gets one column. A column starts with the instruction
//! tile, then stacks three bands of tiles, each band filled row-major with
//! `width` tiles per row: signers, accounts (mutable before immutable) and
//! arguments. The signer band is always at least one row tall so account
//! bands line up across columns.

use serde::Serialize;

use crate::{error::Error, idl::InstructionSummary};

pub const TILE_WIDTH: usize = 240;
pub const TILE_HEIGHT: usize = 60;
pub const HEADER_HEIGHT: usize = 100;
pub const SEPARATOR_WIDTH: usize = 2;
pub const GAP: usize = 8;
pub const TITLE_SIZE: usize = 24;
pub const TEXT_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Instruction,
    Signer,
    MutableAccount,
    ImmutableAccount,
    Argument,
}

impl TileKind {
    pub fn fill(&self) -> &'static str {
        match self {
            TileKind::Instruction => "rgb(255,200,200)",
            TileKind::Signer => "rgb(0,255,163)",
            TileKind::MutableAccount => "rgb(255,100,100)",
            TileKind::ImmutableAccount => "rgb(3,225,255)",
            TileKind::Argument => "rgb(220,31,255)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// A centred line of text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub x: usize,
    pub y: usize,
    pub size: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tile {
    pub kind: TileKind,
    pub fill: &'static str,
    pub rect: Rect,
    pub caption: Label,
    pub label: Label,
}

impl Tile {
    fn new(kind: TileKind, rect: Rect, caption: String, label: String) -> Self {
        let center_x = rect.x + rect.width / 2;
        Self {
            kind,
            fill: kind.fill(),
            rect,
            caption: Label {
                x: center_x,
                y: rect.y + rect.height / 3,
                size: TEXT_SIZE,
                text: caption,
            },
            label: Label {
                x: center_x,
                y: rect.y + 2 * rect.height / 3,
                size: TEXT_SIZE,
                text: label,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub title: Label,
    pub subtitle: Label,
    pub separators: Vec<Rect>,
    pub tiles: Vec<Tile>,
}

impl Figure {
    pub fn tiles_of(&self, kind: TileKind) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(move |t| t.kind == kind)
    }
}

fn rows(count: usize, width: usize) -> usize {
    count.div_ceil(width)
}

/// Rows of tiles below the instruction tile for one instruction
pub fn rows_for(summary: &InstructionSummary, width: usize) -> usize {
    rows(summary.signers.len(), width).max(1)
        + rows(summary.account_count(), width)
        + rows(summary.args.len(), width)
}

/// Horizontal distance between the left edges of adjacent columns,
/// `None` if it does not fit in a `usize`
pub fn column_stride(width: usize) -> Option<usize> {
    let tiles = TILE_WIDTH.checked_mul(width)?;
    let gaps = GAP.checked_mul(width.checked_add(1)?)?;
    tiles.checked_add(gaps)?.checked_add(SEPARATOR_WIDTH)
}

pub fn build(
    name: &str,
    version: &str,
    instructions: &[InstructionSummary],
    width: usize,
) -> Result<Figure, Error> {
    if width == 0 {
        return Err(Error::Layout("width must be at least 1".to_string()));
    }
    if instructions.is_empty() {
        return Err(Error::Layout(format!("program {} has no instructions", name)));
    }

    let columns = instructions.len();
    let row_count = instructions
        .iter()
        .map(|summary| rows_for(summary, width))
        .max()
        .unwrap_or(1);

    let too_large = || Error::Layout(format!("figure for width {} is too large", width));
    let stride = column_stride(width).ok_or_else(too_large)?;
    let fig_width = stride.checked_mul(columns).ok_or_else(too_large)? - SEPARATOR_WIDTH;
    let fig_height = (TILE_HEIGHT + GAP)
        .checked_mul(row_count)
        .and_then(|h| h.checked_add(HEADER_HEIGHT + 3 * GAP + TILE_HEIGHT + 2 * GAP))
        .ok_or_else(too_large)?;

    let separators = (1..columns)
        .map(|i| Rect {
            x: stride * i - SEPARATOR_WIDTH,
            y: HEADER_HEIGHT + GAP,
            width: SEPARATOR_WIDTH,
            height: fig_height - 3 * GAP - (HEADER_HEIGHT + GAP),
        })
        .collect();

    let mut tiles = Vec::new();
    for (i, summary) in instructions.iter().enumerate() {
        let column = Column::new(i, width, stride);

        tiles.push(Tile::new(
            TileKind::Instruction,
            column.header(),
            "Instruction:".to_string(),
            summary.name.clone(),
        ));

        for (n, signer) in summary.signers.iter().enumerate() {
            tiles.push(Tile::new(
                TileKind::Signer,
                column.slot(0, n),
                "Signer:".to_string(),
                signer.clone(),
            ));
        }
        let signer_rows = rows(summary.signers.len(), width).max(1);

        let accounts = summary
            .mutable_accounts
            .iter()
            .map(|a| (TileKind::MutableAccount, "Mutable Account:", a))
            .chain(
                summary
                    .immutable_accounts
                    .iter()
                    .map(|a| (TileKind::ImmutableAccount, "Immutable Account:", a)),
            );
        for (n, (kind, caption, account)) in accounts.enumerate() {
            tiles.push(Tile::new(
                kind,
                column.slot(signer_rows, n),
                caption.to_string(),
                account.clone(),
            ));
        }
        let arg_offset = signer_rows + rows(summary.account_count(), width);

        for (n, arg) in summary.args.iter().enumerate() {
            tiles.push(Tile::new(
                TileKind::Argument,
                column.slot(arg_offset, n),
                format!("{}:", arg.ty),
                arg.name.clone(),
            ));
        }
    }

    Ok(Figure {
        name: name.to_string(),
        width: fig_width,
        height: fig_height,
        title: Label {
            x: fig_width / 2,
            y: HEADER_HEIGHT / 4,
            size: TITLE_SIZE,
            text: format!("Anchor Program: {}", name),
        },
        subtitle: Label {
            x: fig_width / 2,
            y: HEADER_HEIGHT / 2,
            size: TITLE_SIZE,
            text: format!("Version: {}", version),
        },
        separators,
        tiles,
    })
}

// Offsets stay below the figure size, which `build` has already checked
struct Column {
    left: usize,
    width: usize,
    stride: usize,
}

impl Column {
    fn new(index: usize, width: usize, stride: usize) -> Self {
        Self {
            left: stride * index,
            width,
            stride,
        }
    }

    fn header(&self) -> Rect {
        let inner = self.stride - SEPARATOR_WIDTH;
        Rect {
            x: self.left + inner / 2 - TILE_WIDTH / 2,
            y: HEADER_HEIGHT + GAP,
            width: TILE_WIDTH,
            height: TILE_HEIGHT,
        }
    }

    /// Tile `n` of a band that starts `row_offset` rows below the header
    fn slot(&self, row_offset: usize, n: usize) -> Rect {
        let (row, col) = (row_offset + n / self.width, n % self.width);
        Rect {
            x: self.left + GAP * (col + 1) + TILE_WIDTH * col,
            y: HEADER_HEIGHT + 2 * GAP + TILE_HEIGHT + GAP * (row + 1) + TILE_HEIGHT * row,
            width: TILE_WIDTH,
            height: TILE_HEIGHT,
        }
    }
}
