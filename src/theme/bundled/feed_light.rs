//! Feed Light - daylight variant of Feed Dark

pub const THEME: &str = r##"# Feed Light theme for feedbox

[meta]
name = "Feed Light"
version = 1
author = "feedbox"

[ui]
background = "#faf6f0"
foreground = "#5c5650"
border = "#cdc4b8"
border_focused = "#c4784a"
title = "#c4784a"
status_bar = "#c4784a"
selection_bg = "#ede6db"
selection_fg = "#3d3834"
muted = "#857c72"
border_type = "rounded"

[feed]
author = "#4a7a99"
category = "#b85a4a"
reaction = "#7a7268"
reaction_active = "#c4944a"
comment = "#8a6a8f"
filter_active = "#3d8a84"
success = "#6a8f4a"
error = "#b85a4a"
"##;
