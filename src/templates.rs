//! HTML written for newly generated games.

use crate::index::escape_html;

pub const IFRAME_WIDTH: u32 = 800;
pub const IFRAME_HEIGHT: u32 = 600;

/// Placeholder page written by the template-only command.
pub const BLANK_GAME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Game</title>
    <style>
        body {
            margin: 0;
            padding: 0;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            background-color: #f0f0f0;
        }
        .container {
            text-align: center;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Game</h1>
        <!-- Add your game content here -->
    </div>
</body>
</html>
"#;

const GAME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/style.css">
</head>
<body>
    <main>
        <h1>{title}</h1>
        <div class="game-frame">
            <iframe src="/iframes/{folder}/index.html" width="{width}" height="{height}" frameborder="0" allowfullscreen></iframe>
        </div>
        <p><a href="/">Back to all games</a></p>
    </main>
</body>
</html>
"#;

/// Page embedding the game's iframe folder. Both values are HTML-escaped.
pub fn game_page(title: &str, folder_id: &str) -> String {
    GAME_PAGE
        .replace("{folder}", &escape_html(folder_id))
        .replace("{width}", &IFRAME_WIDTH.to_string())
        .replace("{height}", &IFRAME_HEIGHT.to_string())
        .replace("{title}", &escape_html(title))
}
