//! Detail card for the selected graph node.

use leptos::prelude::*;

use super::force_graph::{GraphNode, Theme};

/// Shows name, type badge, content, the first image and the outbound links of
/// `node`. The close button fires `on_close`.
#[component]
pub fn NodeDetail(node: GraphNode, on_close: Callback<()>) -> impl IntoView {
	let badge_color = Theme::default().node_color(node.kind).to_css();
	let image = node.images.first().cloned().map(|image| {
		view! {
			<figure class="node-detail-image">
				<img src=image.url alt=image.caption.clone() />
				<figcaption>{image.caption.to_uppercase()}</figcaption>
			</figure>
		}
	});
	let links = node
		.links
		.iter()
		.map(|link| {
			view! {
				<a
					class="node-detail-link"
					href=link.url.clone()
					target="_blank"
					rel="noopener noreferrer"
				>
					{link.label.to_uppercase()}
				</a>
			}
		})
		.collect_view();

	view! {
		<section class="node-detail">
			<header>
				<h3>{node.name.to_uppercase()}</h3>
				<span class="node-detail-badge" style=format!("background: {badge_color};")>
					{node.kind.as_str().to_uppercase()}
				</span>
				<button class="node-detail-close" on:click=move |_| on_close.run(())>"×"</button>
			</header>
			<p>{node.content.to_uppercase()}</p>
			{image}
			<nav class="node-detail-links">{links}</nav>
		</section>
	}
}
