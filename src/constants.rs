//! Compile-time configuration: grid geometry, tile kinds, and the builtin level boards.

use glam::UVec2;
use strum_macros::{AsRefStr, EnumIter};

use crate::error::ParseError;

/// The size of every level, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(20, 15);

/// The number of cells on a board; also the exclusive upper bound of a linear tile index.
pub const BOARD_CELL_COUNT: usize = (BOARD_CELL_SIZE.x * BOARD_CELL_SIZE.y) as usize;

/// The number of builtin levels.
pub const LEVEL_COUNT: usize = 10;

/// The kind of a single board cell.
///
/// The numeric codes are stable and are what [`Tile::code`] hands to front ends that
/// address tiles as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumIter)]
#[repr(u8)]
#[strum(serialize_all = "lowercase")]
pub enum Tile {
    #[default]
    Empty = 0,
    Wall = 1,
    Goal = 2,
    /// The player's spawn cell. Walkable, never completes a level.
    Start = 3,
}

impl Tile {
    /// Returns the stable numeric code of the tile.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether the player may stand on this tile.
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// The character used for this tile in board layouts and text rendering.
    pub const fn as_char(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Wall => '#',
            Tile::Goal => 'G',
            Tile::Start => 'S',
        }
    }
}

impl TryFrom<u8> for Tile {
    type Error = ParseError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Tile::Empty),
            1 => Ok(Tile::Wall),
            2 => Ok(Tile::Goal),
            3 => Ok(Tile::Start),
            _ => Err(ParseError::UnknownTileCode(code)),
        }
    }
}

/// A named level layout, one string per row.
///
/// `#` is a wall, a space or `.` is open floor, `S` marks the start and `G` a goal.
#[derive(Debug, Clone, Copy)]
pub struct RawLevel {
    pub name: &'static str,
    pub board: &'static [&'static str],
}

/// The builtin level layouts, in play order.
pub const RAW_LEVELS: [RawLevel; LEVEL_COUNT] = [
    RawLevel {
        name: "Doorstep",
        board: &[
            "####################",
            "#S#                #",
            "# #  ######  ##### #",
            "# #  #    #      # #",
            "# #  # ## #####  # #",
            "#    G #     #   # #",
            "###### # ### # ### #",
            "#      #   # #     #",
            "# ######## # ##### #",
            "#        # #     # #",
            "# ###### # ##### # #",
            "# #    # #     # # #",
            "# # ## # ##### # # #",
            "#      #           #",
            "####################",
        ],
    },
    RawLevel {
        name: "Switchback",
        board: &[
            "####################",
            "#S     #           #",
            "##### ## ######### #",
            "#   #    #       # #",
            "# # ###### ##### # #",
            "# #        #   # # #",
            "# ########## # # # #",
            "#          # # #   #",
            "########## # # #####",
            "#        # # #     #",
            "# ###### # # ##### #",
            "# #    # #   #   # #",
            "# # ## # ##### # # #",
            "#   #G         #   #",
            "####################",
        ],
    },
    RawLevel {
        name: "Long Way Round",
        board: &[
            "####################",
            "#G   #     #     #S#",
            "#### # ### # ### # #",
            "#    #   # # # #   #",
            "# ###### # # # #####",
            "#      # # # #     #",
            "###### # # # ##### #",
            "#      #   #       #",
            "# ################ #",
            "# #              # #",
            "# # ############ # #",
            "# #            # # #",
            "# ############ # # #",
            "#              #   #",
            "####################",
        ],
    },
    RawLevel {
        name: "Corridors",
        board: &[
            "####################",
            "#S        #        #",
            "######### # ###### #",
            "#       # # #    # #",
            "# ##### # # # ## # #",
            "# #   # #   #  # # #",
            "# # # # ####### #  #",
            "# # # #       # #  #",
            "# # # ####### # ## #",
            "# # #       # #  # #",
            "# # ####### # ## # #",
            "# #       # #  # # #",
            "# ####### # ##   # #",
            "#         #   G#   #",
            "####################",
        ],
    },
    RawLevel {
        name: "Backtrack",
        board: &[
            "####################",
            "#     #     #     S#",
            "# ### # ### # ######",
            "# # #   # #        #",
            "# # ##### ######## #",
            "# #     #        # #",
            "# ##### # ###### # #",
            "#     # #      # # #",
            "##### # ###### # # #",
            "#   # #      # # # #",
            "# # # ###### # # # #",
            "# # #      # # #   #",
            "# # ###### # # #####",
            "#G#        #       #",
            "####################",
        ],
    },
    RawLevel {
        name: "Combs",
        board: &[
            "####################",
            "#S #   #   #   #   #",
            "#  # # # # # # # # #",
            "#  # # # # # # # # #",
            "#    #   #   #   # #",
            "################## #",
            "#                  #",
            "# ##################",
            "#                  #",
            "################## #",
            "#   #   #   #   #  #",
            "# # # # # # # # # ##",
            "# # # # # # # # #  #",
            "#G#   #   #   #   ##",
            "####################",
        ],
    },
    RawLevel {
        name: "Spiral",
        board: &[
            "####################",
            "#        S         #",
            "# ################ #",
            "# #              # #",
            "# # ############ # #",
            "# # #          # # #",
            "# # # ######## # # #",
            "# # # #  G   # # # #",
            "# # # #### # # # # #",
            "# # #      # # # # #",
            "# # ######## # # # #",
            "# #          # # # #",
            "# ############ # # #",
            "#              #   #",
            "####################",
        ],
    },
    RawLevel {
        name: "Crossroads",
        board: &[
            "####################",
            "#S    #            #",
            "# ### # #### # ### #",
            "# # #   #  # # # # #",
            "# # ##### ## # # # #",
            "# #     #    #   # #",
            "# ##### ######## # #",
            "#     #        # # #",
            "##### # ###### # # #",
            "#   # # #    # #   #",
            "# # # # # ## # #####",
            "# # #   # #  #     #",
            "# # ##### # ###### #",
            "# #       #       G#",
            "####################",
        ],
    },
    RawLevel {
        name: "Burrow",
        board: &[
            "####################",
            "#G #     #     #   #",
            "#  # ### # ### # # #",
            "## # # # # # # # # #",
            "#  # # #   # #   # #",
            "# ## # ##### ##### #",
            "#    #           # #",
            "# ###### ####### # #",
            "# #    # #     # # #",
            "# # ## # # ### # # #",
            "# # #  #   # # # # #",
            "# # # ####### # # ##",
            "# # #              #",
            "#   ########### # S#",
            "####################",
        ],
    },
    RawLevel {
        name: "Inner Room",
        board: &[
            "####################",
            "#S                 #",
            "# ################ #",
            "# #G             # #",
            "# ############## # #",
            "#              # # #",
            "############## # # #",
            "#            # # # #",
            "# ########## # # # #",
            "# #        # # # # #",
            "# # ###### # # # # #",
            "# # #    # # # # # #",
            "# # # ## # #   # # #",
            "#     #  #######   #",
            "####################",
        ],
    },
];
