use super::*;

impl Transition {
    pub fn allowed_from(&self, state: State) -> bool {
        self.sources.contains(state)
    }

    pub fn permits(&self, post: &Post, actor: i64) -> bool {
        (self.guard)(post, actor)
    }

    pub(crate) fn defaults() -> [Transition; 3] {
        [
            Transition {
                name: PUBLISH,
                sources: EnumSet::only(State::Draft),
                target: State::Published,
                description: "Publish",
                guard: is_author,
            },
            Transition {
                name: ARCHIVE,
                sources: EnumSet::all() - State::Archived,
                target: State::Archived,
                description: "Archive",
                guard: is_author,
            },
            Transition {
                name: DRAFT,
                sources: EnumSet::all(),
                target: State::Draft,
                description: "Return to draft",
                guard: is_author,
            },
        ]
    }
}
