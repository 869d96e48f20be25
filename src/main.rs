use hydrate::error::AppResult;

fn main() -> AppResult<()> {
    hydrate::entry::run()
}
