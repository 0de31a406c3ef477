use blog_core::{
    BlogError, BlogStore, FixedClock, InMemoryFile, KvBlogRepository, Locale, MemoryStore,
    NewPost, PostId, ValidationError, POSTS_KEY,
};

const T0: i64 = 1_714_557_600_000;

type MemStore = BlogStore<KvBlogRepository<MemoryStore>>;

fn open_store(store: MemoryStore) -> (MemStore, FixedClock) {
    let clock = FixedClock::at_millis(T0);
    let blog = BlogStore::open_with(
        KvBlogRepository::new(store),
        Box::new(clock.clone()),
        Locale::En,
    );
    (blog, clock)
}

fn stored_blob(blog: &MemStore) -> Option<String> {
    blog.repository().store().raw(POSTS_KEY).map(str::to_string)
}

#[test]
fn create_post_prepends_and_persists() {
    let (mut blog, clock) = open_store(MemoryStore::new());

    let first = blog
        .create_post(NewPost::new("First", "hello"))
        .unwrap()
        .id;
    clock.advance_millis(10);
    let created = blog
        .create_post(NewPost::new("Second", "**world**"))
        .unwrap()
        .clone();

    assert_eq!(created.title, "Second");
    assert_eq!(created.content, "**world**");
    assert_ne!(created.id, first);
    assert_eq!(blog.posts().len(), 2);
    assert_eq!(blog.posts()[0].id, created.id);
    assert_eq!(blog.posts()[1].id, first);
    assert_eq!(
        stored_blob(&blog).unwrap(),
        serde_json::to_string(blog.posts()).unwrap()
    );
}

#[test]
fn create_post_embeds_image_and_keeps_attachment_order() {
    let (mut blog, _clock) = open_store(MemoryStore::new());
    let draft = NewPost::new("Files", "see attachments")
        .with_image(InMemoryFile::new("cover.png", "image/png", vec![1u8, 2, 3]))
        .with_attachment(InMemoryFile::new("b.txt", "text/plain", b"bb".to_vec()))
        .with_attachment(InMemoryFile::new("a.txt", "text/plain", b"a".to_vec()));

    let post = blog.create_post(draft).unwrap();

    assert_eq!(post.image_url.as_deref(), Some("data:image/png;base64,AQID"));
    let names: Vec<&str> = post.attachments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["b.txt", "a.txt"]);
    assert_eq!(post.attachments[0].size, 2);
    assert_eq!(post.attachments[0].data, "data:text/plain;base64,YmI=");
}

#[test]
fn create_post_rejects_blank_fields_without_writing() {
    let (mut blog, _clock) = open_store(MemoryStore::new());

    let err = blog.create_post(NewPost::new("title", "  \n")).unwrap_err();
    assert!(matches!(
        err,
        BlogError::Validation(ValidationError::EmptyField("content"))
    ));
    assert!(blog.posts().is_empty());
    assert!(stored_blob(&blog).is_none());
}

#[test]
fn add_comment_appends_in_order() {
    let (mut blog, clock) = open_store(MemoryStore::new());
    let post_id = blog.create_post(NewPost::new("t", "c")).unwrap().id;

    clock.advance_millis(1_000);
    blog.add_comment(post_id, "ann", "first").unwrap();
    clock.advance_millis(1_000);
    let second = blog.add_comment(post_id, "bob", "second").unwrap();

    let post = blog.post(post_id).unwrap();
    assert_eq!(post.comments.len(), 2);
    let last = post.comments.last().unwrap();
    assert_eq!(last, &second);
    assert_eq!(last.author, "bob");
    assert_eq!(last.content, "second");
    assert!(last.date >= post.date);
    assert_eq!(
        stored_blob(&blog).unwrap(),
        serde_json::to_string(blog.posts()).unwrap()
    );
}

#[test]
fn add_comment_to_unknown_post_leaves_storage_untouched() {
    let (mut blog, _clock) = open_store(MemoryStore::new());
    blog.create_post(NewPost::new("t", "c")).unwrap();
    let before = stored_blob(&blog);

    let err = blog.add_comment(PostId(42), "ann", "hi").unwrap_err();

    assert!(matches!(err, BlogError::NotFound(PostId(42))));
    assert_eq!(stored_blob(&blog), before);
}

#[test]
fn add_comment_rejects_blank_author() {
    let (mut blog, _clock) = open_store(MemoryStore::new());
    let post_id = blog.create_post(NewPost::new("t", "c")).unwrap().id;

    let err = blog.add_comment(post_id, "", "hi").unwrap_err();

    assert!(matches!(
        err,
        BlogError::Validation(ValidationError::EmptyField("author"))
    ));
    assert!(blog.post(post_id).unwrap().comments.is_empty());
}

#[test]
fn failed_save_rolls_back_new_post() {
    let (mut blog, _clock) = open_store(MemoryStore::with_quota(400));
    blog.create_post(NewPost::new("small", "fits")).unwrap();
    let before = stored_blob(&blog);

    let err = blog
        .create_post(NewPost::new("large", "x".repeat(1_000)))
        .unwrap_err();

    assert!(matches!(err, BlogError::Persistence(_)));
    assert_eq!(blog.posts().len(), 1);
    assert_eq!(blog.posts()[0].title, "small");
    assert_eq!(stored_blob(&blog), before);
}

#[test]
fn failed_save_rolls_back_new_comment() {
    let (mut blog, _clock) = open_store(MemoryStore::with_quota(400));
    let post_id = blog.create_post(NewPost::new("small", "fits")).unwrap().id;

    let err = blog
        .add_comment(post_id, "ann", &"y".repeat(1_000))
        .unwrap_err();

    assert!(matches!(err, BlogError::Persistence(_)));
    assert!(blog.post(post_id).unwrap().comments.is_empty());
    assert_eq!(
        stored_blob(&blog).unwrap(),
        serde_json::to_string(blog.posts()).unwrap()
    );
}

#[test]
fn reopen_reproduces_collection() {
    let (mut blog, clock) = open_store(MemoryStore::new());
    let first = blog
        .create_post(
            NewPost::new("one", "# heading").with_attachment(InMemoryFile::new(
                "notes.md",
                "text/markdown",
                b"# notes".to_vec(),
            )),
        )
        .unwrap()
        .id;
    clock.advance_millis(5);
    let second = blog.create_post(NewPost::new("two", "body")).unwrap().id;
    blog.add_comment(first, "ann", "nice").unwrap();
    blog.add_comment(second, "bob", "ok").unwrap();
    blog.add_comment(first, "cat", "again").unwrap();
    let snapshot = blog.posts().to_vec();

    let repo = blog.close();
    let reopened = BlogStore::open(repo);

    assert_eq!(reopened.posts(), snapshot.as_slice());
}

#[test]
fn ids_continue_above_loaded_ids_on_a_frozen_clock() {
    let (mut blog, _clock) = open_store(MemoryStore::new());
    let first = blog.create_post(NewPost::new("a", "b")).unwrap().id;
    let repo = blog.close();

    let clock = FixedClock::at_millis(T0);
    let mut reopened = BlogStore::open_with(repo, Box::new(clock), Locale::En);
    let second = reopened.create_post(NewPost::new("c", "d")).unwrap().id;

    assert!(second > first);
}

#[test]
fn corrupt_blob_opens_as_empty_blog() {
    let mut raw = MemoryStore::new();
    blog_core::KeyValueStore::set(&mut raw, POSTS_KEY, "[{\"id\":").unwrap();

    let (blog, _clock) = open_store(raw);

    assert!(blog.posts().is_empty());
}
