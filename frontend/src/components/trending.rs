//! Trending section: a fixed row of sample cards.

use leptos::*;

use crate::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Skeleton,
};
use crate::TrendingEntry;

#[component]
pub fn TrendingSection() -> impl IntoView {
    let cards = TrendingEntry::trending()
        .into_iter()
        .map(|entry| view! { <TrendingCard entry=entry/> })
        .collect_view();

    view! {
        <section id="trending" aria-labelledby="trending-title">
            <div class="mb-6 flex items-center justify-between">
                <h2 id="trending-title" class="text-2xl font-bold tracking-tight">
                    "Trending Now"
                </h2>
                <Button variant=ButtonVariant::Link>"View All"</Button>
            </div>
            <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {cards}
            </div>
        </section>
    }
}

/// One sample book: skeleton cover, title, author, duration and a listen action.
#[component]
pub fn TrendingCard(entry: TrendingEntry) -> impl IntoView {
    view! {
        <Card class="overflow-hidden border-none shadow-md transition-shadow hover:shadow-xl">
            <div class="aspect-[16/9] w-full bg-muted">
                <Skeleton class="h-full w-full"/>
            </div>
            <CardHeader>
                <CardTitle class="line-clamp-1">{entry.title}</CardTitle>
                <CardDescription>{entry.author}</CardDescription>
            </CardHeader>
            <CardContent>
                <div class="flex items-center justify-between">
                    <span class="text-sm font-medium text-muted-foreground">{entry.duration}</span>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>
                        "Listen"
                    </Button>
                </div>
            </CardContent>
        </Card>
    }
}
