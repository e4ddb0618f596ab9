//! Feed Dark - the default theme
//! Warm neutrals with a brass accent for focus

pub const THEME: &str = r##"# Feed Dark theme for feedbox

[meta]
name = "Feed Dark"
version = 1
author = "feedbox"

[ui]
background = "#28292d"
foreground = "#d4cfc9"
border = "#3a3b40"
border_focused = "#c9a66b"
title = "#c9a66b"
status_bar = "#c9a66b"
selection_bg = "#3d3834"
selection_fg = "#e8e4df"
muted = "#8a8279"
border_type = "rounded"

[feed]
author = "#6b98b8"
category = "#c75f4a"
reaction = "#8a8279"
reaction_active = "#d4a54a"
comment = "#a88fad"
filter_active = "#5da9a1"
success = "#8fad5c"
error = "#c75f4a"
"##;
