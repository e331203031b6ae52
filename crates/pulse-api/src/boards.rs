use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use mongodb::bson::oid::ObjectId;

use pulse_types::models::{Board, Post};

use crate::AppState;
use crate::error::ApiError;

/// Server-rendered board view: the board name, a submission form bound to
/// the board, and every post ordered most-voted first. An unknown board id
/// navigates back to the landing page rather than erroring.
pub async fn board_page(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<Response, ApiError> {
    let Ok(board_id) = ObjectId::parse_str(&board_id) else {
        return Ok(Redirect::to("/").into_response());
    };

    let Some(board) = state.db.find_board(board_id).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    let posts = state.db.posts_for_board(board_id).await?;

    Ok(Html(render_board_page(&board, &posts)).into_response())
}

pub async fn home_page() -> Html<&'static str> {
    Html(HOME_PAGE)
}

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Pulse</title></head>
<body>
<main>
<h1>Pulse</h1>
<p>Public feedback boards. Open a board at <code>/b/&lt;boardId&gt;</code>.</p>
</main>
</body>
</html>
"#;

fn render_board_page(board: &Board, posts: &[Post]) -> String {
    let mut items = String::new();
    for post in posts {
        items.push_str(&format!(
            r#"<li class="post">
<button class="vote" onclick="toggleVote(this, '{post_id}')">&#9650; <span class="votes">{votes}</span></button>
<div><h3>{title}</h3><p>{description}</p></div>
</li>
"#,
            post_id = post.id.to_hex(),
            votes = post.votes_counter,
            title = escape_html(&post.title),
            description = escape_html(&post.description),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{name}</title></head>
<body>
<main>
<h1>{name}</h1>
<form onsubmit="submitPost(event, '{board_id}')">
<input name="title" placeholder="Short, descriptive title" required>
<textarea name="description" placeholder="Description"></textarea>
<button type="submit">Add post</button>
</form>
<ul class="posts">
{items}</ul>
</main>
<script>{script}</script>
</body>
</html>
"#,
        name = escape_html(&board.name),
        board_id = board.id.to_hex(),
        items = items,
        script = PAGE_SCRIPT,
    )
}

/// Client-side glue for the rendered page: JSON form submission, and the
/// vote toggle with its local-storage flag. Both vote transitions are
/// optimistic and revert the counter and flag if the request fails.
const PAGE_SCRIPT: &str = r#"
async function submitPost(ev, boardId) {
  ev.preventDefault();
  const form = ev.target;
  const res = await fetch('/api/post?boardId=' + boardId, {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ title: form.title.value, description: form.description.value }),
  });
  if (res.ok) { location.reload(); return; }
  const body = await res.json();
  alert(body.error);
}
async function toggleVote(btn, postId) {
  const key = 'pulse-votes-' + postId;
  const counter = btn.querySelector('.votes');
  const before = parseInt(counter.textContent, 10);
  const voted = localStorage.getItem(key) === 'true';
  counter.textContent = voted ? before - 1 : before + 1;
  if (voted) { localStorage.removeItem(key); } else { localStorage.setItem(key, 'true'); }
  const res = await fetch('/api/vote?postId=' + postId, { method: voted ? 'DELETE' : 'POST' });
  if (!res.ok) {
    counter.textContent = before;
    if (voted) { localStorage.setItem(key, 'true'); } else { localStorage.removeItem(key); }
  }
}
"#;

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;

    fn board() -> Board {
        Board {
            id: ObjectId::new(),
            name: "Roadmap".into(),
        }
    }

    fn post(title: &str, votes: i64, board_id: ObjectId) -> Post {
        Post {
            id: ObjectId::new(),
            title: title.into(),
            description: "d".into(),
            board_id,
            user_id: None,
            votes_counter: votes,
            created_at: DateTime::now(),
        }
    }

    #[test]
    fn posts_render_in_the_order_given() {
        let board = board();
        // posts_for_board hands these over already sorted by votes.
        let posts = vec![
            post("five", 5, board.id),
            post("three", 3, board.id),
            post("one", 1, board.id),
        ];

        let page = render_board_page(&board, &posts);
        let five = page.find("five").unwrap();
        let three = page.find("three").unwrap();
        let one = page.find("one").unwrap();
        assert!(five < three && three < one);
    }

    #[test]
    fn form_is_bound_to_the_board() {
        let board = board();
        let page = render_board_page(&board, &[]);
        assert!(page.contains(&format!("submitPost(event, '{}')", board.id.to_hex())));
    }

    #[test]
    fn board_name_appears_in_heading_and_title() {
        let page = render_board_page(&board(), &[]);
        assert!(page.contains("<h1>Roadmap</h1>"));
        assert!(page.contains("<title>Roadmap</title>"));
    }

    #[test]
    fn user_text_is_escaped() {
        let board = board();
        let posts = vec![post("<script>alert(1)</script>", 0, board.id)];
        let page = render_board_page(&board, &posts);
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn escape_covers_the_usual_suspects() {
        assert_eq!(
            escape_html(r#"a & b < c > "d" 'e'"#),
            "a &amp; b &lt; c &gt; &quot;d&quot; &#39;e&#39;"
        );
    }
}
