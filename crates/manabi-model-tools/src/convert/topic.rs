use crate::convert::FromDbModel;
use manabi_entity::topic::Model as TopicModel;
use manabi_model::topic::Topic;

impl FromDbModel<TopicModel> for Topic {
    fn from_db_model(model: TopicModel) -> Self {
        Self {
            id: model.id,
            text: model.text,
            date_added: model.date_added,
        }
    }
}
