//! Leptos components for the wiki UI
//!
//! The route signal from [`HashRouter`] drives which view is shown; the search
//! query only affects the home view. Each section and each copy button owns
//! its own small piece of state.

use std::sync::Arc;

use leptos::prelude::*;
use wiki_web::command::split_comment;
use wiki_web::markdown::{render_inline, render_markdown};
use wiki_web::{filter_pages, Icon, Page, PageSummary, Resolved, Route, Section, Wiki};

use crate::clipboard::{spawn_copy, Clipboard, ClipboardContext, CopyFeedback};
use crate::router::{HashRouter, Location};

/// Root wiki app component
#[component]
pub fn WikiApp(
    /// Content to display
    wiki: Wiki,
    /// Source of truth for the current route
    location: Arc<dyn Location>,
    /// Target of the command copy buttons
    clipboard: Arc<dyn Clipboard>,
) -> impl IntoView {
    let router = HashRouter::new(location);
    provide_context(router.clone());
    provide_context(ClipboardContext(clipboard));
    on_cleanup({
        let router = router.clone();
        move || router.dispose()
    });

    let route = router.route_signal();
    // Keyed on the page alone so that following a section link keeps the
    // page (and its open/closed sections) mounted.
    let view_slug = Memo::new(move |_| route.with(|r| r.slug().to_string()));
    let anchor = Signal::derive(move || route.with(|r| r.anchor().map(str::to_string)));

    let (query, set_query) = signal(String::new());

    let site_title = wiki.site_title.clone();
    let tagline = wiki.tagline.clone();
    let nav_pages: Vec<PageSummary> = wiki.pages.iter().map(PageSummary::from).collect();
    let wiki = StoredValue::new(wiki);

    let results = Memo::new(move |_| {
        query.with(|q| {
            wiki.with_value(|w| {
                filter_pages(q, &w.pages)
                    .into_iter()
                    .map(PageSummary::from)
                    .collect::<Vec<_>>()
            })
        })
    });

    view! {
        <div class="wiki-layout">
            <Sidebar
                site_title=site_title.clone()
                tagline=tagline
                pages=nav_pages
                active=view_slug
            />

            <div class="main">
                <Topbar
                    site_title=site_title
                    query=query
                    on_input=move |q| set_query.set(q)
                />

                <main class="content">
                    {move || {
                        let route = Route::from_fragment(&view_slug.get());
                        wiki.with_value(|w| match route.resolve(w) {
                            Resolved::Home => {
                                view! {
                                    <HomeView
                                        site_title=w.site_title.clone()
                                        tagline=w.tagline.clone()
                                        query=query
                                        results=results
                                    />
                                }
                                    .into_any()
                            }
                            Resolved::Page { page, .. } => {
                                view! { <PageView page=page.clone() anchor=anchor /> }.into_any()
                            }
                            Resolved::NotFound { slug } => view! { <NotFound slug=slug /> }.into_any(),
                        })
                    }}
                </main>
            </div>
        </div>
    }
}

/// Sidebar with the home link and one link per page
#[component]
pub fn Sidebar(
    site_title: String,
    tagline: String,
    pages: Vec<PageSummary>,
    /// Route token of the current view
    active: Memo<String>,
) -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1>{site_title}</h1>
                <p>{tagline}</p>
            </div>
            <ul class="nav-list">
                <li>
                    <SidebarLink route=Route::Home label="Home".to_string() icon=Icon::Home active=active />
                </li>
                {pages
                    .into_iter()
                    .map(|page| {
                        view! {
                            <li>
                                <SidebarLink
                                    route=Route::page(page.slug)
                                    label=page.title
                                    icon=page.icon
                                    active=active
                                />
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
fn SidebarLink(route: Route, label: String, icon: Icon, active: Memo<String>) -> impl IntoView {
    let router = expect_context::<HashRouter>();
    let slug = route.slug().to_string();

    view! {
        <button
            class="nav-link"
            class:active=move || active.with(|a| *a == slug)
            on:click=move |_| router.navigate(&route)
        >
            <IconGlyph icon=icon />
            <span>{label}</span>
        </button>
    }
}

/// Header bar with the search box
#[component]
pub fn Topbar(
    site_title: String,
    query: ReadSignal<String>,
    on_input: impl Fn(String) + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <header class="topbar">
            <div class="breadcrumb">
                <span>{site_title}</span>
                <span class="breadcrumb-sep">"›"</span>
                <span>"Wiki"</span>
            </div>
            <input
                type="search"
                class="search-input"
                placeholder="Search pages, features, and commands…"
                aria-label="Search pages"
                prop:value=move || query.get()
                on:input=move |e| on_input(event_target_value(&e))
            />
        </header>
    }
}

/// Label above the home grid while a query is active
pub fn result_count_label(count: usize) -> String {
    format!("{count} result(s)")
}

/// Landing view: greeting plus every page, or the search results
#[component]
pub fn HomeView(
    site_title: String,
    tagline: String,
    query: ReadSignal<String>,
    results: Memo<Vec<PageSummary>>,
) -> impl IntoView {
    view! {
        <div class="home">
            <div class="home-hero">
                <h2>
                    <IconGlyph icon=Icon::Home />
                    {format!("Welcome to {site_title}")}
                </h2>
                <p>{tagline}</p>
            </div>

            {move || {
                let pages = results.get();
                let label = if query.with(|q| q.trim().is_empty()) {
                    "Browse sections".to_string()
                } else {
                    result_count_label(pages.len())
                };
                let grid = if pages.is_empty() {
                    view! { <p class="empty-results">"No pages match your search."</p> }.into_any()
                } else {
                    view! { <PageGrid pages=pages /> }.into_any()
                };
                view! {
                    <div class="result-count">{label}</div>
                    {grid}
                }
            }}
        </div>
    }
}

/// Card grid used by the home view
#[component]
pub fn PageGrid(pages: Vec<PageSummary>) -> impl IntoView {
    let router = expect_context::<HashRouter>();

    view! {
        <div class="page-grid">
            {pages
                .into_iter()
                .map(|page| {
                    let router = router.clone();
                    let route = Route::page(page.slug);
                    view! {
                        <button class="page-card" on:click=move |_| router.navigate(&route)>
                            <span class="page-card-title">
                                <IconGlyph icon=page.icon />
                                {page.title}
                            </span>
                            <p>{page.summary}</p>
                            <TagList tags=page.tags />
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TagList(tags: Vec<String>) -> impl IntoView {
    (!tags.is_empty()).then(|| {
        view! {
            <div class="tags">
                {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
            </div>
        }
    })
}

/// A full page: header, table of contents and sections
#[component]
pub fn PageView(
    page: Page,
    /// Section to scroll to
    #[prop(into)]
    anchor: Signal<Option<String>>,
) -> impl IntoView {
    #[cfg(feature = "csr")]
    Effect::new(move |_| {
        let anchor = anchor.get();
        request_animation_frame(move || crate::router::scroll_to_anchor(anchor.as_deref()));
    });
    #[cfg(not(feature = "csr"))]
    let _ = anchor;

    let Page {
        slug,
        title,
        icon,
        summary,
        sections,
        tags,
    } = page;

    let toc: Vec<(String, String)> = sections
        .iter()
        .map(|section| (Route::section(&slug, &section.id).href(), section.title.clone()))
        .collect();

    view! {
        <article class="wiki-page">
            <header class="page-header">
                <h2>
                    <IconGlyph icon=icon />
                    {title}
                </h2>
                <p>{summary}</p>
                <TagList tags=tags />
            </header>

            {(!toc.is_empty()).then(|| {
                view! {
                    <nav class="toc">
                        <h4>"On this page"</h4>
                        <ul>
                            {toc
                                .into_iter()
                                .map(|(href, title)| view! { <li><a href=href>{title}</a></li> })
                                .collect_view()}
                        </ul>
                    </nav>
                }
            })}

            {sections
                .into_iter()
                .map(|section| view! { <SectionView page_slug=slug.clone() section=section /> })
                .collect_view()}
        </article>
    }
}

/// Open/closed state of one section. Sections start open.
#[derive(Debug, Clone, Copy)]
pub struct SectionToggle {
    open: RwSignal<bool>,
}

impl Default for SectionToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionToggle {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(true),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn is_open_untracked(&self) -> bool {
        self.open.get_untracked()
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }
}

/// A collapsible section
#[component]
pub fn SectionView(page_slug: String, section: Section) -> impl IntoView {
    let toggle = SectionToggle::new();
    let link = Route::section(page_slug, &section.id).href();

    let Section {
        id,
        title,
        body,
        bullets,
        commands,
        tips,
    } = section;

    let body_html = (!body.is_empty()).then(|| render_markdown(&body));

    view! {
        <section class="wiki-section" class:collapsed=move || !toggle.is_open() id=id>
            <div class="section-header">
                <button
                    class="section-toggle"
                    aria-expanded=move || toggle.is_open().to_string()
                    on:click=move |_| toggle.toggle()
                >
                    <span class="chevron">"▾"</span>
                    <span class="section-title">{title}</span>
                </button>
                <a class="section-link" href=link title="Link to section">"#"</a>
            </div>

            <div class="section-body" hidden=move || !toggle.is_open()>
                {body_html.map(|html| view! { <div class="section-text" inner_html=html></div> })}

                {(!bullets.is_empty()).then(|| {
                    view! {
                        <ul class="bullets">
                            {bullets
                                .into_iter()
                                .map(|b| view! { <li inner_html=render_inline(&b)></li> })
                                .collect_view()}
                        </ul>
                    }
                })}

                {(!commands.is_empty()).then(|| view! { <CodeBlock lines=commands /> })}

                {(!tips.is_empty()).then(|| {
                    view! {
                        <aside class="tips">
                            <div class="tips-label">"Tips"</div>
                            <ul>
                                {tips
                                    .into_iter()
                                    .map(|t| view! { <li inner_html=render_inline(&t)></li> })
                                    .collect_view()}
                            </ul>
                        </aside>
                    }
                })}
            </div>
        </section>
    }
}

/// Command lines, each with a copy button
#[component]
pub fn CodeBlock(lines: Vec<String>) -> impl IntoView {
    view! {
        <div class="command-block">
            {lines.into_iter().map(|line| view! { <CommandLine line=line /> }).collect_view()}
        </div>
    }
}

#[component]
fn CommandLine(line: String) -> impl IntoView {
    // Shown verbatim, with the comment part dimmed.
    let command_len = split_comment(&line).0.len();
    let command = line[..command_len].to_string();
    let comment = line[command_len..].to_string();

    view! {
        <div class="command-line">
            <pre>
                <code>
                    {command}
                    {(!comment.is_empty()).then(|| view! { <span class="command-comment">{comment}</span> })}
                </code>
            </pre>
            <CopyButton line=line />
        </div>
    }
}

/// Copies its command line and briefly shows a confirmation
#[component]
pub fn CopyButton(line: String) -> impl IntoView {
    let ClipboardContext(clipboard) = expect_context::<ClipboardContext>();
    let feedback = CopyFeedback::new();

    view! {
        <button
            class="copy-button"
            class:copied=move || feedback.is_confirmed()
            title="Copy"
            on:click=move |_| spawn_copy(clipboard.clone(), line.clone(), feedback)
        >
            {move || if feedback.is_confirmed() { "✓ Copied" } else { "Copy" }}
        </button>
    }
}

/// Shown for a slug no page has
#[component]
pub fn NotFound(slug: String) -> impl IntoView {
    let router = expect_context::<HashRouter>();

    view! {
        <div class="not-found">
            <h2>
                <IconGlyph icon=Icon::Book />
                "Page not found"
            </h2>
            <p>"The page " <code>{format!("\"{slug}\"")}</code> " doesn’t exist yet."</p>
            <button class="home-button" on:click=move |_| router.navigate(&Route::Home)>
                "Go Home"
            </button>
        </div>
    }
}

#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    view! {
        <span class=format!("icon icon-{}", icon.css_class()) aria-hidden="true">
            {icon.glyph()}
        </span>
    }
}
