use fuelpoint_chatlink::error::ChatlinkServiceError;
use fuelpoint_chatlink::usecase::link::{LinkChatInput, LinkChatUseCase};

use crate::helpers::{MemoryStore, expired_code, test_code, test_user};

fn link_usecase(store: &MemoryStore) -> LinkChatUseCase<MemoryStore> {
    LinkChatUseCase {
        codes: store.clone(),
    }
}

#[tokio::test]
async fn should_link_user_and_enable_notifications() {
    let mut user = test_user();
    user.notifications_enabled = false;
    let store = MemoryStore::with_users(vec![user.clone()]);
    store.insert_code(test_code(user.id, "TF4K9PQ2"));

    let linked = link_usecase(&store)
        .execute(LinkChatInput {
            code: "TF4K9PQ2".to_owned(),
            chat_id: "555111".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(linked.id, user.id);
    assert_eq!(linked.name, user.name);
    assert_eq!(linked.email, user.email);

    let stored = store.user(user.id).unwrap();
    assert_eq!(stored.chat_id.as_deref(), Some("555111"));
    assert!(stored.chat_verified_at.is_some());
    assert!(stored.notifications_enabled, "link must re-enable notifications");
}

#[tokio::test]
async fn should_normalize_code_typed_in_lowercase() {
    let user = test_user();
    let store = MemoryStore::with_users(vec![user.clone()]);
    store.insert_code(test_code(user.id, "TF4K9PQ2"));

    let result = link_usecase(&store)
        .execute(LinkChatInput {
            code: "  tf4k9pq2 ".to_owned(),
            chat_id: "555111".to_owned(),
        })
        .await;

    assert!(result.is_ok(), "expected link to succeed, got {result:?}");
}

#[tokio::test]
async fn should_fail_with_invalid_format_for_unrecognized_text() {
    let store = MemoryStore::default();

    for text in ["hello", "", "TF4K9", "code TF4K9PQ2 please"] {
        let result = link_usecase(&store)
            .execute(LinkChatInput {
                code: text.to_owned(),
                chat_id: "555111".to_owned(),
            })
            .await;
        assert!(
            matches!(result, Err(ChatlinkServiceError::InvalidCodeFormat)),
            "expected InvalidCodeFormat for {text:?}, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_fail_with_invalid_chat_id_for_blank_chat() {
    let user = test_user();
    let store = MemoryStore::with_users(vec![user.clone()]);
    store.insert_code(test_code(user.id, "TF4K9PQ2"));

    let result = link_usecase(&store)
        .execute(LinkChatInput {
            code: "TF4K9PQ2".to_owned(),
            chat_id: "   ".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(ChatlinkServiceError::InvalidChatId)));
}

#[tokio::test]
async fn should_fail_with_code_not_found_for_never_issued_code() {
    let store = MemoryStore::with_users(vec![test_user()]);

    let result = link_usecase(&store)
        .execute(LinkChatInput {
            code: "TFZZZZZZ".to_owned(),
            chat_id: "555111".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(ChatlinkServiceError::CodeNotFound)));
}

#[tokio::test]
async fn should_fail_with_expired_for_code_past_ttl() {
    let user = test_user();
    let store = MemoryStore::with_users(vec![user.clone()]);
    store.insert_code(expired_code(user.id, "TF4K9PQ2"));

    let result = link_usecase(&store)
        .execute(LinkChatInput {
            code: "TF4K9PQ2".to_owned(),
            chat_id: "555111".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(ChatlinkServiceError::CodeExpired)));

    // Expired redemption must not link the account.
    assert_eq!(store.user(user.id).unwrap().chat_id, None);
}

#[tokio::test]
async fn should_fail_with_already_used_on_second_redemption() {
    let user = test_user();
    let store = MemoryStore::with_users(vec![user.clone()]);
    store.insert_code(test_code(user.id, "TF4K9PQ2"));
    let usecase = link_usecase(&store);

    usecase
        .execute(LinkChatInput {
            code: "TF4K9PQ2".to_owned(),
            chat_id: "555111".to_owned(),
        })
        .await
        .unwrap();

    let retry = usecase
        .execute(LinkChatInput {
            code: "TF4K9PQ2".to_owned(),
            chat_id: "666222".to_owned(),
        })
        .await;

    assert!(matches!(retry, Err(ChatlinkServiceError::CodeAlreadyUsed)));

    // The losing attempt must not overwrite the linked chat.
    assert_eq!(store.user(user.id).unwrap().chat_id.as_deref(), Some("555111"));
}

#[tokio::test(flavor = "multi_thread")]
async fn should_allow_exactly_one_winner_under_concurrent_redemption() {
    let user = test_user();
    let store = MemoryStore::with_users(vec![user.clone()]);
    store.insert_code(test_code(user.id, "TF4K9PQ2"));

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let usecase = LinkChatUseCase { codes: store };
            usecase
                .execute(LinkChatInput {
                    code: "TF4K9PQ2".to_owned(),
                    chat_id: format!("chat-{i}"),
                })
                .await
        }));
    }

    let mut winners = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => winners += 1,
            Err(ChatlinkServiceError::CodeAlreadyUsed | ChatlinkServiceError::CodeNotFound) => {}
            Err(other) => panic!("unexpected loser error: {other:?}"),
        }
    }

    assert_eq!(winners, 1, "exactly one concurrent redemption may win");

    let stored = store.user(user.id).unwrap();
    assert!(stored.chat_id.is_some(), "winner must have linked the account");
}

#[tokio::test]
async fn should_not_resurrect_code_after_unlink() {
    let user = test_user();
    let store = MemoryStore::with_users(vec![user.clone()]);
    store.insert_code(test_code(user.id, "TF4K9PQ2"));
    let usecase = link_usecase(&store);

    usecase
        .execute(LinkChatInput {
            code: "TF4K9PQ2".to_owned(),
            chat_id: "555111".to_owned(),
        })
        .await
        .unwrap();

    use fuelpoint_chatlink::domain::repository::UserRepository as _;
    store.unlink_chat(user.id).await.unwrap();

    // The consumed code stays consumed; unlink only clears the account side.
    let retry = usecase
        .execute(LinkChatInput {
            code: "TF4K9PQ2".to_owned(),
            chat_id: "555111".to_owned(),
        })
        .await;
    assert!(matches!(retry, Err(ChatlinkServiceError::CodeAlreadyUsed)));
}
