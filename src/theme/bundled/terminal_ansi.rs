//! Terminal ANSI - inherits the terminal's own ANSI palette

pub const THEME: &str = r##"# Terminal ANSI theme for feedbox
# "ansi:X" colors follow whatever palette the terminal is configured with:
# - ansi:0-7 = standard colors, ansi:8-15 = bright variants
# - ansi:fg / ansi:bg = terminal defaults

[meta]
name = "Terminal ANSI"
version = 1

[ui]
background = "ansi:bg"
foreground = "ansi:fg"
border = "ansi:8"
border_focused = "ansi:3"
title = "ansi:6"
status_bar = "ansi:fg"
selection_bg = "ansi:8"
selection_fg = "ansi:fg"

[feed]
author = "ansi:4"
category = "ansi:1"
reaction = "ansi:fg"
reaction_active = "ansi:3"
comment = "ansi:5"
filter_active = "ansi:6"
success = "ansi:2"
error = "ansi:1"
"##;
