//! Nord - arctic, north-bluish palette

pub const THEME: &str = r##"# Nord theme for feedbox

[meta]
name = "Nord"
version = 1

[ui]
background = "#2e3440"
foreground = "#d8dee9"
border = "#4c566a"
border_focused = "#ebcb8b"
title = "#88c0d0"
status_bar = "#d8dee9"
selection_bg = "#434c5e"
selection_fg = "#eceff4"

[feed]
author = "#81a1c1"
category = "#bf616a"
reaction = "#d8dee9"
reaction_active = "#ebcb8b"
comment = "#b48ead"
filter_active = "#88c0d0"
success = "#a3be8c"
error = "#bf616a"
"##;
