use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub move_op: Color, // Cyan for < >
    pub cell_op: Color, // Plain text for + -
    pub io_op: Color,   // Yellow for . ,
    pub loop_op: Color, // Blue for [ ]
    pub cursor: Color,  // Pink for the tape cursor
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current instruction
    move_op: Color::Rgb(148, 226, 213),
    cell_op: Color::Rgb(205, 214, 244),
    io_op: Color::Rgb(249, 226, 175),
    loop_op: Color::Rgb(137, 180, 250),
    cursor: Color::Rgb(245, 194, 231),
};
