//! 规则列表面板

use crate::types::RuleSlot;

/// 规则列表
///
/// 焦点由面板自身持有的唯一索引表示，`None` 表示焦点在面板容器上。
#[derive(Debug, Clone)]
pub struct RuleListPanel {
    slots: Vec<RuleSlot>,
    focus: Option<usize>,
}

impl RuleListPanel {
    /// 创建面板，默认带一个空规则且其获得焦点
    pub fn new() -> Self {
        Self {
            slots: vec![RuleSlot::new()],
            focus: Some(0),
        }
    }

    /// 在末尾追加一个空规则，并把焦点移给它
    pub fn add_slot(&mut self) {
        self.slots.push(RuleSlot::new());
        self.focus = Some(self.slots.len() - 1);
        log::debug!("Rule slot added ({} total)", self.slots.len());
    }

    /// 删除获得焦点的规则，仅当它是最后一个时生效
    ///
    /// 删除后焦点移到新的最后一项；列表为空时回到面板容器。
    /// 返回是否发生了删除。
    pub fn delete_slot(&mut self) -> bool {
        match (self.focus, self.slots.len()) {
            (Some(index), len) if len > 0 && index == len - 1 => self.delete_slot_at(index),
            _ => false,
        }
    }

    /// 删除指定位置的规则
    ///
    /// 焦点若在被删项之后则前移一位；被删项本身有焦点时，焦点移到新的最后一项。
    pub fn delete_slot_at(&mut self, index: usize) -> bool {
        if index >= self.slots.len() {
            return false;
        }
        self.slots.remove(index);

        self.focus = match self.focus {
            _ if self.slots.is_empty() => None,
            Some(f) if f == index => Some(self.slots.len() - 1),
            Some(f) if f > index => Some(f - 1),
            other => other,
        };

        log::debug!("Rule slot {index} removed ({} left)", self.slots.len());
        true
    }

    /// 焦点向下循环移动
    pub fn cycle_focus_down(&mut self) {
        if self.slots.is_empty() {
            return;
        }
        let next = self.focus.map_or(0, |f| (f + 1) % self.slots.len());
        self.focus = Some(next);
    }

    /// 当前获得焦点的规则索引
    pub fn focused(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused_slot_mut(&mut self) -> Option<&mut RuleSlot> {
        self.focus.and_then(|f| self.slots.get_mut(f))
    }

    pub fn slots(&self) -> &[RuleSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 按顺序取出所有规则文本
    pub fn rules(&self) -> Vec<String> {
        self.slots.iter().map(|slot| slot.text().to_string()).collect()
    }
}

impl Default for RuleListPanel {
    fn default() -> Self {
        Self::new()
    }
}
