//! Rendering constants and runtime configuration defaults

// Text grid layout
/// Marker drawn in a cell holding a queen
pub const QUEEN_MARKER: char = 'Q';
/// Marker drawn in an empty cell
pub const EMPTY_MARKER: char = ' ';
/// Width of one grid cell in characters, excluding borders
pub const CELL_WIDTH: usize = 3;

// PNG export settings
/// Side length of one board square in pixels
pub const PNG_CELL_PIXELS: u32 = 24;
/// Margin between a queen and the edge of its square in pixels
pub const PNG_QUEEN_MARGIN: u32 = 5;
/// Colour of light squares
pub const LIGHT_SQUARE_RGBA: [u8; 4] = [240, 217, 181, 255];
/// Colour of dark squares
pub const DARK_SQUARE_RGBA: [u8; 4] = [181, 136, 99, 255];
/// Colour of queens
pub const QUEEN_RGBA: [u8; 4] = [32, 32, 32, 255];
/// Filename prefix for exported boards
pub const EXPORT_FILE_PREFIX: &str = "solution";

// Interactive session
/// Prompt shown before reading a board size
pub const PROMPT: &str = "Board size (blank to quit): ";
/// Inputs that end the interactive session
pub const QUIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
