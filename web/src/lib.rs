//! Component template: a Leptos root component with a click counter and
//! some static descriptive content.

use counter::Counter;
use leptos::prelude::*;

pub const TITLE: &str = "Frontend Design Leptos Template";
pub const SUBTITLE: &str = "Leptos + WebAssembly + Rust";
pub const DESCRIPTION: &str = "点击按钮增加计数。此模板展示了基础的 Leptos 组件开发模式。";

pub const FEATURES: [&str; 5] = [
    "⚡ Leptos - 细粒度响应式渲染",
    "🦀 Rust - 内存安全与零成本抽象",
    "🕸️ WebAssembly - 接近原生的运行速度",
    "🧪 wasm-bindgen-test - 浏览器内测试",
    "📦 devserver - 一键构建与本地预览",
];

/// An external documentation link shown at the bottom of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocLink {
    pub title: &'static str,
    pub href: &'static str,
}

pub const LINKS: [DocLink; 3] = [
    DocLink {
        title: "Leptos 文档",
        href: "https://leptos.dev",
    },
    DocLink {
        title: "wasm-bindgen 文档",
        href: "https://rustwasm.github.io/docs/wasm-bindgen/",
    },
    DocLink {
        title: "Rust 文档",
        href: "https://www.rust-lang.org/learn",
    },
];

/// A button showing the number of times it was clicked.
///
/// Every mount starts again from zero.
#[component]
pub fn CounterButton() -> impl IntoView {
    let (counter, set_counter) = signal(Counter::new());

    view! {
        <button on:click=move |_| set_counter.update(|counter| {
            counter.increment();
        })>
            {move || counter.get().label()}
        </button>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <header class="app-header">
                <h1>{TITLE}</h1>
                <p>{SUBTITLE}</p>
            </header>

            <main class="app-main">
                <div class="card">
                    <CounterButton/>
                    <p>{DESCRIPTION}</p>
                </div>

                <div class="info">
                    <h2>"模板特性"</h2>
                    <ul>
                        {FEATURES.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
                    </ul>
                </div>

                <div class="links">
                    <h2>"相关资源"</h2>
                    {LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href target="_blank" rel="noreferrer">
                                    {link.title}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </main>
        </div>
    }
}
